use std::fmt;

use crate::token::TokenType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Import,
    Serialize,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    /// Index path from the root to the offending value, when known.
    pub path: Vec<usize>,
}

impl Error {
    pub fn import(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Import,
            message: message.into(),
            path: Vec::new(),
        }
    }

    pub fn serialize(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Serialize,
            message: message.into(),
            path: Vec::new(),
        }
    }

    pub fn at(mut self, index: usize) -> Self {
        self.path.insert(0, index);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{} at ", self.message)?;
        for (i, index) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

/// Caller misuse of the token API. Reported by panicking, never returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    #[error("token kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        expected: TokenType,
        found: TokenType,
    },
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("token type {0} is reserved for built-in kinds")]
    ReservedTokenType(TokenType),
    #[error("user payload tagged {token_type} is not a {expected}")]
    PayloadMismatch {
        token_type: TokenType,
        expected: &'static str,
    },
    #[error("byte buffer of length {len} does not fit the arena")]
    BufferOverflow { len: usize },
}

#[track_caller]
pub(crate) fn violation(violation: ContractViolation) -> ! {
    panic!("{violation}")
}
