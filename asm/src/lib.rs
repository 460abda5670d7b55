pub mod assembler;
pub mod error;
pub mod label;
pub mod line;
pub mod memory;
pub mod msg;
pub mod parser;
pub mod util;

/// Longest accepted source line, in bytes.
pub const MAX_LINE_LEN: usize = 500;
