use crate::{op::Op, reg::Reg};

use color_print::cformat;
use std::fmt;
use thiserror::Error;

// ----------------------------------------------------------------------------
// Immediate

/// Immediate operand as it is laid out in the instruction stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Imm {
    /// Packed into the low byte of the instruction word.
    Short(i8),
    /// Carried whole by the word following the instruction.
    Big(u32),
}

impl Imm {
    /// Literals in `[-128, 127]` pack into the instruction word.
    pub fn literal(value: i32) -> Imm {
        match i8::try_from(value) {
            Ok(v) => Imm::Short(v),
            Err(_) => Imm::Big(value as u32),
        }
    }

    /// Label addresses always take the big form, whatever their value.
    pub fn address(addr: u32) -> Imm {
        Imm::Big(addr)
    }

    /// Words occupied by an instruction carrying this immediate.
    pub fn width(&self) -> usize {
        match self {
            Imm::Short(_) => 1,
            Imm::Big(_) => 2,
        }
    }

    pub fn value(&self) -> i32 {
        match *self {
            Imm::Short(v) => v as i32,
            Imm::Big(v) => v as i32,
        }
    }
}

// ----------------------------------------------------------------------------
// Word layout
//
//  31      24 23  20 19  16 15  12 11   9   8   7       0
// +----------+------+------+------+------+-----+---------+
// |  opcode  |  rd  |  rs  |  rt  | rsvd | big |  imm8   |
// +----------+------+------+------+------+-----+---------+

const BIG_IMM: u32 = 1 << 8;

fn enc_format(opcode: u8, rd: u8, rs: u8, rt: u8, big: bool, imm8: u8) -> u32 {
    ((opcode as u32) << 24)
        | (((rd & 0xF) as u32) << 20)
        | (((rs & 0xF) as u32) << 16)
        | (((rt & 0xF) as u32) << 12)
        | ((big as u32) << 8)
        | (imm8 as u32)
}

fn dec_format(bin: u32) -> (u8, u8, u8, u8, bool, u8) {
    let opcode = ((bin >> 24) & 0xFF) as u8;
    let rd = ((bin >> 20) & 0xF) as u8;
    let rs = ((bin >> 16) & 0xF) as u8;
    let rt = ((bin >> 12) & 0xF) as u8;
    let big = bin & BIG_IMM != 0;
    let imm8 = (bin & 0xFF) as u8;
    (opcode, rd, rs, rt, big, imm8)
}

/// Number of words the instruction starting with `first` occupies.
pub fn width_of(first: u32) -> usize {
    if first & BIG_IMM != 0 {
        2
    } else {
        1
    }
}

// ----------------------------------------------------------------------------
// Instruction

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Unknown opcode: {0}")]
    UnknownOpcode(u8),

    #[error("Big immediate flag set but no immediate word follows")]
    MissingImmediate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inst {
    pub op: Op,
    pub rd: Reg,
    pub rs: Reg,
    pub rt: Reg,
    pub imm: Imm,
}

impl Inst {
    pub fn new(op: Op, rd: Reg, rs: Reg, rt: Reg, imm: Imm) -> Self {
        Inst { op, rd, rs, rt, imm }
    }

    pub fn width(&self) -> usize {
        self.imm.width()
    }

    /// Instruction word, followed by the immediate word in the big form.
    pub fn to_bin(&self) -> (u32, Option<u32>) {
        let (op, rd, rs, rt) = (self.op.code(), self.rd.code(), self.rs.code(), self.rt.code());
        match self.imm {
            Imm::Short(v) => (enc_format(op, rd, rs, rt, false, v as u8), None),
            Imm::Big(v) => (enc_format(op, rd, rs, rt, true, 0), Some(v)),
        }
    }

    /// `next` is only consulted when the big immediate flag is set.
    pub fn from_bin(first: u32, next: Option<u32>) -> Result<Inst, DecodeError> {
        let (opcode, rd, rs, rt, big, imm8) = dec_format(first);
        let op = Op::try_from(opcode).map_err(|_| DecodeError::UnknownOpcode(opcode))?;
        let imm = if big {
            Imm::Big(next.ok_or(DecodeError::MissingImmediate)?)
        } else {
            Imm::Short(imm8 as i8)
        };
        Ok(Inst::new(op, Reg::from(rd), Reg::from(rs), Reg::from(rt), imm))
    }

    pub fn cformat(&self) -> String {
        let imm = match self.imm {
            Imm::Short(v) => cformat!("<y>{}</>", v),
            Imm::Big(v) => cformat!("<y>0x{:08X}</>", v),
        };
        cformat!(
            "<r>{:<5}</><b>{:<6} {:<6} {:<6}</> {}",
            self.op,
            self.rd,
            self.rs,
            self.rt,
            imm
        )
    }
}

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}, {}, {}",
            self.op,
            self.rd,
            self.rs,
            self.rt,
            self.imm.value()
        )
    }
}
