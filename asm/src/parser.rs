use arch::{
    inst::{Imm, Inst},
    op::Op,
    reg::Reg,
};
use color_print::cformat;

use crate::{error::Error, label::Labels, line};

pub const WORD_DIRECTIVE: &str = ".word";

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `name:`
    Label(String),
    /// `.word addr, data`
    Word(Operand, Operand),
    /// `op rd, rs, rt, imm`
    Code(Code),
}

impl Stmt {
    /// `code` must already be normalized and non-empty.
    pub fn parse(code: &str) -> Result<Stmt, Error> {
        if let Some(label) = code.strip_suffix(':') {
            return Ok(Stmt::Label(label.trim().to_string()));
        }

        let toks = line::tokenize(code);
        if toks.get(0) == Some(WORD_DIRECTIVE) {
            return match (toks.len(), toks.as_slice()) {
                (3, [_, addr, data]) => Ok(Stmt::Word(Operand::parse(addr)?, Operand::parse(data)?)),
                (found, _) => Err(Error::MalformedInstruction {
                    expected: 3,
                    found: found + toks.is_truncated() as usize,
                }),
            };
        }

        match toks.as_slice() {
            [op, rd, rs, rt, imm] if !toks.is_truncated() => Ok(Stmt::Code(Code {
                op: op.to_string(),
                regs: [rd.to_string(), rs.to_string(), rt.to_string()],
                imm: Operand::parse(imm)?,
            })),
            _ => Err(Error::MalformedInstruction {
                expected: line::MAX_TOKENS,
                found: toks.len() + toks.is_truncated() as usize,
            }),
        }
    }

    pub fn cformat(&self) -> String {
        match self {
            Stmt::Label(name) => cformat!("<g>{}:</>", name),
            Stmt::Word(addr, data) => {
                cformat!("<c>{} {}, {}</>", WORD_DIRECTIVE, addr.cfmt(), data.cfmt())
            }
            Stmt::Code(code) => code.cformat(),
        }
    }
}

// ----------------------------------------------------------------------------
// Operation

/// An instruction whose opcode and registers are still source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    pub op: String,
    pub regs: [String; 3],
    pub imm: Operand,
}

impl Code {
    /// Words this instruction occupies; known before any label is resolved.
    pub fn width(&self) -> usize {
        match &self.imm {
            Operand::Literal(v) => Imm::literal(*v).width(),
            Operand::Ident(_) => 2,
        }
    }

    pub fn resolve(&self, labels: &Labels) -> Result<Inst, Error> {
        let op = Op::parse(&self.op).ok_or_else(|| Error::UnknownOpcode(self.op.clone()))?;
        let reg = |name: &String| Reg::parse(name).ok_or_else(|| Error::UnknownRegister(name.clone()));
        let rd = reg(&self.regs[0])?;
        let rs = reg(&self.regs[1])?;
        let rt = reg(&self.regs[2])?;
        let imm = match &self.imm {
            Operand::Literal(v) => Imm::literal(*v),
            Operand::Ident(name) => Imm::address(labels.lookup(name)? as u32),
        };
        Ok(Inst::new(op, rd, rs, rt, imm))
    }

    pub fn cformat(&self) -> String {
        cformat!(
            "<r>{:<5}</><b>{:<6} {:<6} {:<6}</> {}",
            self.op,
            self.regs[0],
            self.regs[1],
            self.regs[2],
            self.imm.cfmt()
        )
    }
}

// ----------------------------------------------------------------------------
// Operand

/// Immediate or `.word` operand: a number, or a label to look up later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Literal(i32),
    Ident(String),
}

impl Operand {
    /// Hex literals are 32-bit two's-complement patterns: `0xFFFFFFFF` is -1.
    pub fn parse(s: &str) -> Result<Operand, Error> {
        if let Some(hex) = s.strip_prefix("0x") {
            return u32::from_str_radix(hex, 16)
                .map(|v| Operand::Literal(v as i32))
                .map_err(|_| Error::InvalidNumber(s.to_string()));
        }
        if is_decimal(s) {
            return s
                .parse::<i32>()
                .map(Operand::Literal)
                .map_err(|_| Error::InvalidNumber(s.to_string()));
        }
        Ok(Operand::Ident(s.to_string()))
    }

    pub fn resolve(&self, labels: &Labels) -> Result<i64, Error> {
        match self {
            Operand::Literal(v) => Ok(*v as i64),
            Operand::Ident(name) => labels.lookup(name).map(|addr| addr as i64),
        }
    }

    fn cfmt(&self) -> String {
        match self {
            Operand::Literal(v) => cformat!("<y>{}</>", v),
            Operand::Ident(name) => cformat!("<g,u>{}</>", name),
        }
    }
}

/// Optional sign followed by at least one decimal digit.
fn is_decimal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
