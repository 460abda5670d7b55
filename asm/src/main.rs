use arch::MEM_SIZE;
use color_print::cprintln;
use simpasm::{assembler, error::Error, util};
use std::{
    fs::File,
    io::BufReader,
    process::ExitCode,
};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "program.asm")]
    input: String,

    /// Output memory image
    #[clap(short, long, default_value = "memin.txt")]
    output: String,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,

    /// Write the symbol table as YAML
    #[clap(short, long)]
    symbols: Option<String>,
}

fn main() -> ExitCode {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("SIMP Assembler");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => {
            cprintln!("<r,s>Assembly failed</>: no output written");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), ()> {
    println!("1. Read Source");
    println!("  < {}", args.input);
    let file = File::open(&args.input).map_err(|e| Error::FileOpen(args.input.clone(), e).print())?;
    let source = assembler::read_source(BufReader::new(file))
        .map_err(|e| e.print_diag(&args.input, &[]))?;

    println!("2. Resolve Labels & Generate Image");
    let asm = assembler::assemble(&source).map_err(|e| e.print_diag(&args.input, &source))?;
    for diag in &asm.diags {
        diag.print(&args.input, &source);
    }
    println!("  - {} labels", asm.labels.len());

    if args.dump {
        util::print_dump(&asm);
    }

    println!("3. Write Output");
    println!("  > {}", args.output);
    if let Some(path) = &args.symbols {
        println!("  > {}", path);
    }
    util::write_outputs(&asm, &args.output, args.symbols.as_deref()).map_err(|e| e.print())?;

    println!(
        "Assembled program: used {} words out of {}.",
        asm.used, MEM_SIZE
    );
    Ok(())
}
