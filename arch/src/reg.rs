use num_enum::{FromPrimitive, IntoPrimitive};
use strum::{Display, EnumCount, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    FromPrimitive,
    IntoPrimitive,
    EnumString,
    EnumCount,
    Display,
)]
#[repr(u8)]
pub enum Reg {
    #[default]
    #[strum(to_string = "$zero")]
    ZERO,
    #[strum(to_string = "$imm")]
    IMM,
    #[strum(to_string = "$v0")]
    V0,
    #[strum(to_string = "$a0")]
    A0,
    #[strum(to_string = "$a1")]
    A1,
    #[strum(to_string = "$a2")]
    A2,
    #[strum(to_string = "$a3")]
    A3,
    #[strum(to_string = "$t0")]
    T0,
    #[strum(to_string = "$t1")]
    T1,
    #[strum(to_string = "$t2")]
    T2,
    #[strum(to_string = "$s0")]
    S0,
    #[strum(to_string = "$s1")]
    S1,
    #[strum(to_string = "$s2")]
    S2,
    #[strum(to_string = "$gp")]
    GP,
    #[strum(to_string = "$sp")]
    SP,
    #[strum(to_string = "$ra")]
    RA,
}

impl Reg {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn code(self) -> u8 {
        self.into()
    }
}
