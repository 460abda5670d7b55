mod listing;

use clap::Parser;
use color_print::cprintln;
use listing::Entry;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(
    name = "SIMP Image Checker",
    author = "kanade-k-1228",
    version = "v0.1.0",
    about = "Decode a SIMP memory image back into assembly"
)]
struct Args {
    /// Memory image, one 32-digit binary word per line
    #[arg(default_value = "memin.txt")]
    input_file: String,

    /// Print the raw word next to each instruction
    #[arg(short, long)]
    raw: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    println!("SIMP Image Checker");

    let text = match std::fs::read_to_string(&args.input_file) {
        Ok(text) => text,
        Err(e) => {
            cprintln!("<red,bold>error</>: Failed to open file: {}", args.input_file);
            cprintln!("     <blue>cause</>: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("+-----------------------------------------------+");
    println!("| {:<45} |", args.input_file);
    println!("+-----------------------------------------------+");

    let mut errors = 0;
    for entry in listing::decode(text.lines()) {
        match entry {
            Entry::Inst(addr, inst) => {
                if args.raw {
                    let (first, next) = inst.to_bin();
                    let next = next.map(|w| format!("{:08X}", w)).unwrap_or_default();
                    cprintln!("<c>{:03X}</>  {:08X} {:8}  {}", addr, first, next, inst);
                } else {
                    cprintln!("<c>{:03X}</>  {}", addr, inst);
                }
            }
            Entry::Error(addr, err) => {
                errors += 1;
                cprintln!("<c>{:03X}</>  <r>; ERROR: {}</>", addr, err);
            }
            Entry::Zeros(addr, count) => {
                cprintln!("<c>{:03X}</>  <s>; {} zero words</>", addr, count);
            }
        }
    }

    if errors > 0 {
        cprintln!("<r,s>{} word(s) could not be decoded</>", errors);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
