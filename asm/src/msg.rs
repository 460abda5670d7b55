use color_print::cprintln;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Error(String),
    Warn(String),
    Note(String),
}

impl Msg {
    /// `info` is (file, 1-based line number, raw source line).
    pub fn print(&self, info: (&str, usize, &str)) {
        let (file, line, raw) = info;
        match self {
            Msg::Error(msg) => cprintln!("<red,bold>error</>: {}", msg),
            Msg::Warn(msg) => cprintln!("<yellow,bold>warn</>: {}", msg),
            Msg::Note(msg) => cprintln!("<green,bold>note</>: {}", msg),
        }
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line, raw);
        cprintln!("      <blue>|</>");
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Msg::Error(_))
    }
}

/// A message attached to a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diag {
    pub line_no: usize,
    pub msg: Msg,
}

impl Diag {
    pub fn new(line_no: usize, msg: Msg) -> Self {
        Diag { line_no, msg }
    }

    /// Prints against `source`, the lines the assembler was given.
    pub fn print(&self, file: &str, source: &[String]) {
        let raw = source
            .get(self.line_no.wrapping_sub(1))
            .map(|s| s.as_str())
            .unwrap_or("");
        self.msg.print((file, self.line_no, raw));
    }
}
