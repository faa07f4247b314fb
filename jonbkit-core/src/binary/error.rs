use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("truncated input at offset {offset:#010x}: {expected} bytes expected, but only {available} available")]
    TruncatedInput {
        offset: usize,
        expected: usize,
        available: usize,
    },
    #[error("non-ASCII byte {byte:#04x} at offset {offset:#010x}")]
    Encoding { offset: usize, byte: u8 },
    #[error("{expected} image name(s) expected, but got {actual}")]
    UnexpectedImageCount { expected: usize, actual: usize },
}

impl ErrorKind {
    pub fn invalid_format(message: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidFormat(message.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    context_stack: Vec<String>,
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Context frames, innermost first.
    pub fn context_stack(&self) -> &[String] {
        &self.context_stack
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind,
            context_stack: vec![],
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        for (i, context) in self.context_stack.iter().rev().enumerate() {
            write!(f, "\n{i:5}: {context}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

pub trait ResultContextExt {
    fn context(self, text: &str) -> Self;
    fn with_context(self, text: impl FnOnce() -> String) -> Self;
}

impl<T> ResultContextExt for Result<T, Error> {
    fn context(self, text: &str) -> Self {
        self.with_context(|| text.to_string())
    }

    fn with_context(self, text: impl FnOnce() -> String) -> Self {
        self.map_err(|mut error| {
            error.context_stack.push(text());
            error
        })
    }
}
