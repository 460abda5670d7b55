use arch::{inst::Inst, MEM_SIZE};
use std::io::BufRead;

use crate::{
    error::{Error, LineError},
    label::Labels,
    line,
    memory::Memory,
    msg::{Diag, Msg},
    parser::Stmt,
    MAX_LINE_LEN,
};

/// A non-blank source line after the first pass.
#[derive(Debug, Clone)]
pub struct Line {
    /// 1-based.
    pub line_no: usize,
    pub stmt: Stmt,
    /// Sequential address, for instructions only.
    pub addr: Option<usize>,
    /// Filled by the second pass.
    pub inst: Option<Inst>,
}

#[derive(Debug)]
pub struct Assembly {
    pub memory: Memory,
    pub labels: Labels,
    pub lines: Vec<Line>,
    /// Final value of the sequential cursor.
    pub used: usize,
    pub diags: Vec<Diag>,
}

/// Collect the source lines, rejecting any longer than [`MAX_LINE_LEN`].
pub fn read_source<R: BufRead>(reader: R) -> Result<Vec<String>, LineError> {
    let mut source = vec![];
    for (idx, raw) in reader.lines().enumerate() {
        let raw = raw.map_err(|e| Error::FileRead(e).at(idx + 1))?;
        if raw.len() > MAX_LINE_LEN {
            return Err(Error::LineTooLong(MAX_LINE_LEN).at(idx + 1));
        }
        source.push(raw);
    }
    Ok(source)
}

pub fn assemble(source: &[String]) -> Result<Assembly, LineError> {
    let (lines, labels) = first_pass(source)?;
    second_pass(lines, labels)
}

/// Parse every line, give each instruction its address and record labels.
/// Nothing is encoded here.
pub fn first_pass(source: &[String]) -> Result<(Vec<Line>, Labels), LineError> {
    let mut lines = vec![];
    let mut labels = Labels::new();
    let mut pc: usize = 0;

    for (idx, raw) in source.iter().enumerate() {
        let line_no = idx + 1;
        let code = line::normalize(raw);
        if code.is_empty() {
            continue;
        }

        let stmt = Stmt::parse(code).map_err(|e| e.at(line_no))?;
        let addr = match &stmt {
            Stmt::Label(name) => {
                labels.insert(name, pc, line_no).map_err(|e| e.at(line_no))?;
                None
            }
            Stmt::Word(..) => None,
            Stmt::Code(code) => {
                let next = pc + code.width();
                if next > MEM_SIZE {
                    return Err(Error::AddressOutOfRange((next - 1) as i64).at(line_no));
                }
                Some(std::mem::replace(&mut pc, next))
            }
        };

        lines.push(Line {
            line_no,
            stmt,
            addr,
            inst: None,
        });
    }

    Ok((lines, labels))
}

/// Resolve operands against the finished symbol table and fill the image.
pub fn second_pass(mut lines: Vec<Line>, labels: Labels) -> Result<Assembly, LineError> {
    let mut memory = Memory::new();
    let mut diags = vec![];
    let mut pc: usize = 0;

    for line in lines.iter_mut() {
        let line_no = line.line_no;
        let mut store = |addr: usize, word: u32| -> Result<(), LineError> {
            let prev = memory.store(addr, word, line_no).map_err(|e| e.at(line_no))?;
            if let Some(prev) = prev {
                diags.push(Diag::new(
                    line_no,
                    Msg::Warn(format!("Word 0x{:03X} overwritten; the last write wins", addr)),
                ));
                diags.push(Diag::new(prev, Msg::Note("Previously written here".to_string())));
            }
            Ok(())
        };

        match &line.stmt {
            Stmt::Label(_) => {}
            Stmt::Word(addr, data) => {
                let addr = addr.resolve(&labels).map_err(|e| e.at(line_no))?;
                let data = data.resolve(&labels).map_err(|e| e.at(line_no))?;
                let addr = usize::try_from(addr)
                    .ok()
                    .filter(|a| *a < MEM_SIZE)
                    .ok_or_else(|| Error::AddressOutOfRange(addr).at(line_no))?;
                store(addr, data as u32)?;
            }
            Stmt::Code(code) => {
                let inst = code.resolve(&labels).map_err(|e| e.at(line_no))?;
                debug_assert_eq!(line.addr, Some(pc));
                let (first, next) = inst.to_bin();
                store(pc, first)?;
                pc += 1;
                if let Some(next) = next {
                    store(pc, next)?;
                    pc += 1;
                }
                line.inst = Some(inst);
            }
        }
    }

    Ok(Assembly {
        memory,
        labels,
        lines,
        used: pc,
        diags,
    })
}
