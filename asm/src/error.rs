use crate::msg::Msg;
use arch::MEM_SIZE;
use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown opcode: `{0}`")]
    UnknownOpcode(String),

    #[error("Unknown register: `{0}`")]
    UnknownRegister(String),

    #[error("Undefined label: `{0}`")]
    UnknownLabel(String),

    #[error("Re-defined label: `{0}`")]
    DuplicateLabel(String, usize),

    #[error("Too many labels: `{0}` exceeds the limit of {1}")]
    LabelTableFull(String, usize),

    #[error("Invalid label name: `{0}`")]
    InvalidLabel(String),

    #[error("Malformed instruction: expected {expected} tokens, found {found}")]
    MalformedInstruction { expected: usize, found: usize },

    #[error("Address {0} out of range [0..{}]", MEM_SIZE - 1)]
    AddressOutOfRange(i64),

    #[error("Cannot parse `{0}` as a number")]
    InvalidNumber(String),

    #[error("Line longer than {0} characters")]
    LineTooLong(usize),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

impl Error {
    pub fn at(self, line_no: usize) -> LineError {
        LineError {
            line_no,
            error: self,
        }
    }

    /// Print an error that is not tied to a source line.
    pub fn print(&self) {
        cprintln!("<red,bold>error</>: {}", self);
        if let Some(source) = std::error::Error::source(self) {
            cprintln!("     <blue>cause</>: {}", source);
        }
    }
}

/// A fatal error located at a 1-based source line.
#[derive(Error, Debug)]
#[error("line {line_no}: {error}")]
pub struct LineError {
    pub line_no: usize,
    #[source]
    pub error: Error,
}

impl LineError {
    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, source: &[String]) {
        let raw = |line_no: usize| {
            source
                .get(line_no.wrapping_sub(1))
                .map(|s| s.as_str())
                .unwrap_or("")
        };

        Msg::Error(self.error.to_string()).print((file, self.line_no, raw(self.line_no)));
        if let Error::DuplicateLabel(_, prev) = &self.error {
            Msg::Note("Already defined here".to_string()).print((file, *prev, raw(*prev)));
        }
        if let Some(cause) = std::error::Error::source(&self.error) {
            cprintln!("     <blue>cause</>: {}", cause);
        }
    }
}
