use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumCount, EnumString};

/// SIMP operations. The discriminant is the 8-bit opcode field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    EnumCount,
    Display,
)]
#[repr(u8)]
#[strum(serialize_all = "lowercase")]
pub enum Op {
    ADD,
    SUB,
    MUL,
    AND,
    OR,
    XOR,
    SLL,
    SRA,
    SRL,
    BEQ,
    BNE,
    BLT,
    BGT,
    BLE,
    BGE,
    JAL,
    LW,
    SW,
    RETI,
    IN,
    OUT,
    HALT,
}

impl Op {
    /// Mnemonics are case-sensitive: `add` is an operation, `ADD` is not.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn code(self) -> u8 {
        self.into()
    }
}
