use arch::{
    inst::{self, DecodeError, Inst},
    word,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Decoded instruction at a word address.
    Inst(usize, Inst),
    /// Word that could not be decoded.
    Error(usize, DecodeError),
    /// Run of zero words reaching the end of the image.
    Zeros(usize, usize),
}

/// Decode an image given as bit-text lines.
/// Lines that are not 32 binary digits are skipped.
pub fn decode<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Entry> {
    let words: Vec<u32> = lines
        .into_iter()
        .filter_map(|line| word::from_bits(line.trim()))
        .collect();
    let end = words.iter().rposition(|w| *w != 0).map_or(0, |i| i + 1);

    let mut entries = vec![];
    let mut addr = 0;
    while addr < end {
        let first = words[addr];
        let next = words.get(addr + 1).copied();
        match Inst::from_bin(first, next) {
            Ok(inst) => {
                let width = inst.width();
                entries.push(Entry::Inst(addr, inst));
                addr += width;
            }
            Err(err) => {
                entries.push(Entry::Error(addr, err));
                addr += inst::width_of(first);
            }
        }
    }
    if addr < words.len() {
        entries.push(Entry::Zeros(addr, words.len() - addr));
    }
    entries
}
