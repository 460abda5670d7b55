pub mod inst;
pub mod op;
pub mod reg;
pub mod word;

/// Number of 32-bit words in a memory image.
pub const MEM_SIZE: usize = 4096;
