//! Text form of a memory word: 32 `0`/`1` characters, most significant bit first.

pub const WORD_BITS: usize = 32;

pub fn to_bits(word: u32) -> String {
    format!("{:032b}", word)
}

/// Returns `None` unless `text` is exactly 32 binary digits.
pub fn from_bits(text: &str) -> Option<u32> {
    if text.len() != WORD_BITS || !text.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u32::from_str_radix(text, 2).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msb_first() {
        assert_eq!(to_bits(0), "0".repeat(32));
        assert_eq!(to_bits(1), format!("{}1", "0".repeat(31)));
        assert_eq!(to_bits(0x8000_0000), format!("1{}", "0".repeat(31)));
        assert_eq!(to_bits(0x0030_0005), "00000000001100000000000000000101");
    }

    #[test]
    fn decode_text() {
        for word in [0, 1, 0x0030_0005, 0xDEAD_BEEF, u32::MAX] {
            assert_eq!(from_bits(&to_bits(word)), Some(word));
        }
        assert_eq!(from_bits(""), None);
        assert_eq!(from_bits("0101"), None);
        assert_eq!(from_bits(&"2".repeat(32)), None);
        assert_eq!(from_bits(&"0".repeat(33)), None);
    }
}
