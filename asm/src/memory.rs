use arch::{word, MEM_SIZE};
use std::io::{self, Write};

use crate::error::Error;

/// The assembled memory image: `MEM_SIZE` words, zero until written.
#[derive(Debug, Clone)]
pub struct Memory {
    words: Vec<u32>,
    /// Source line that last wrote each word.
    owner: Vec<Option<usize>>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            words: vec![0; MEM_SIZE],
            owner: vec![None; MEM_SIZE],
        }
    }

    /// Store `word` at `addr` on behalf of source line `line_no`.
    /// Returns the line that had written this word before, if any.
    pub fn store(&mut self, addr: usize, word: u32, line_no: usize) -> Result<Option<usize>, Error> {
        if addr >= MEM_SIZE {
            return Err(Error::AddressOutOfRange(addr as i64));
        }
        self.words[addr] = word;
        Ok(self.owner[addr].replace(line_no))
    }

    pub fn get(&self, addr: usize) -> Option<u32> {
        self.words.get(addr).copied()
    }

    pub fn owner(&self, addr: usize) -> Option<usize> {
        self.owner.get(addr).copied().flatten()
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// One line of 32 binary digits per word, for the whole address space.
    pub fn write_text<W: Write>(&self, mut out: W) -> io::Result<()> {
        for w in &self.words {
            writeln!(out, "{}", word::to_bits(*w))?;
        }
        out.flush()
    }
}
