/// Most tokens an instruction line can carry: opcode, rd, rs, rt, imm.
pub const MAX_TOKENS: usize = 5;

/// Drop the `#` comment and the surrounding whitespace.
/// An empty result means there is nothing to assemble on this line.
pub fn normalize(raw: &str) -> &str {
    let code = match raw.find('#') {
        Some(pos) => &raw[..pos],
        None => raw,
    };
    code.trim()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens<'a> {
    toks: Vec<&'a str>,
    /// Set when content followed the last kept token.
    truncated: bool,
}

impl<'a> Tokens<'a> {
    pub fn len(&self) -> usize {
        self.toks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toks.is_empty()
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn get(&self, idx: usize) -> Option<&'a str> {
        self.toks.get(idx).copied()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.toks
    }
}

/// Split on runs of space, tab and comma, keeping at most [`MAX_TOKENS`].
pub fn tokenize(code: &str) -> Tokens<'_> {
    let mut words = code
        .split(|c: char| c == ' ' || c == '\t' || c == ',')
        .filter(|w| !w.is_empty());
    let toks: Vec<&str> = words.by_ref().take(MAX_TOKENS).collect();
    let truncated = words.next().is_some();
    Tokens { toks, truncated }
}
