use crate::assembler::{Assembly, Line};
use crate::error::Error;
use color_print::cformat;
use std::{
    fs::{self, File},
    io::{self, BufWriter},
};

/// One listing row per non-blank source line:
/// `[addr] first    second   | line: statement`
pub fn format_line(line: &Line) -> String {
    match (&line.inst, line.addr) {
        (Some(inst), Some(addr)) => {
            let (first, next) = inst.to_bin();
            let next = next.map(|w| format!("{:08X}", w)).unwrap_or_default();
            format!(
                "[{:03X}] {:08X} {:8} | {:>4}:   {}",
                addr,
                first,
                next,
                line.line_no,
                inst.cformat()
            )
        }
        _ => format!("{:23}| {:>4}: {}", "", line.line_no, line.stmt.cformat()),
    }
}

pub fn print_dump(asm: &Assembly) {
    println!("------+-------------------+----------------------------------------------");
    for line in &asm.lines {
        println!("{}", format_line(line));
    }
    println!("------+-------------------+----------------------------------------------");
    for (name, label) in asm.labels.iter() {
        println!("{}", cformat!("<g>{:<20}</> 0x{:03X}", name, label.address));
    }
}

/// Write the memory image and, if asked, the YAML symbol map.
/// On failure no output file is left behind.
pub fn write_outputs(asm: &Assembly, output: &str, symbols: Option<&str>) -> Result<(), Error> {
    let symbols = match symbols {
        Some(path) => {
            let yaml = asm.labels.to_yaml().map_err(|e| {
                Error::FileWrite(path.to_string(), io::Error::new(io::ErrorKind::InvalidData, e))
            })?;
            fs::write(path, yaml).map_err(|e| Error::FileWrite(path.to_string(), e))?;
            Some(path)
        }
        None => None,
    };

    let written = match File::create(output) {
        Ok(out) => asm
            .memory
            .write_text(BufWriter::new(out))
            .map_err(|e| {
                let _ = fs::remove_file(output);
                Error::FileWrite(output.to_string(), e)
            }),
        Err(e) => Err(Error::FileCreate(output.to_string(), e)),
    };
    if written.is_err() {
        if let Some(path) = symbols {
            let _ = fs::remove_file(path);
        }
    }
    written
}
