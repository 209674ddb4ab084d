//! Tagged tokens stored in an [`Arena`](crate::arena::Arena).

pub mod registry;

use std::fmt;

pub use registry::TokenTypeRegistry;

/// Kind tag of a token.
///
/// Built-in kinds and user kinds share one ordered tag space. Every value
/// below [`TokenType::USER`] is reserved for the crate; applications tag
/// their own payloads with values at or above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenType(pub u32);

impl TokenType {
    pub const BYTES: TokenType = TokenType(2);
    pub const SINT: TokenType = TokenType(4);
    pub const UINT: TokenType = TokenType(8);
    pub const SEQUENCE: TokenType = TokenType(16);
    /// First user-assignable tag.
    pub const USER: TokenType = TokenType(64);

    pub fn is_user(self) -> bool {
        self >= Self::USER
    }

    pub fn builtin_name(self) -> Option<&'static str> {
        match self {
            Self::BYTES => Some("BYTES"),
            Self::SINT => Some("SINT"),
            Self::UINT => Some("UINT"),
            Self::SEQUENCE => Some("SEQUENCE"),
            _ => None,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.builtin_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "USER({})", self.0),
        }
    }
}

/// Handle to a token owned by an arena. Equality is identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenId(pub(crate) usize);

impl TokenId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle to a counted array owned by an arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrayId(pub(crate) usize);

/// Byte range inside the arena's byte pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Bytes(Span),
    SInt(i64),
    UInt(u64),
    Sequence(ArrayId),
    User { token_type: TokenType, slot: usize },
}

impl Token {
    pub fn token_type(&self) -> TokenType {
        match self {
            Token::Bytes(_) => TokenType::BYTES,
            Token::SInt(_) => TokenType::SINT,
            Token::UInt(_) => TokenType::UINT,
            Token::Sequence(_) => TokenType::SEQUENCE,
            Token::User { token_type, .. } => *token_type,
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Token::Sequence(_))
    }

    pub fn as_sint(&self) -> Option<i64> {
        match self {
            Token::SInt(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Token::UInt(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<ArrayId> {
        match self {
            Token::Sequence(array) => Some(*array),
            _ => None,
        }
    }

    pub fn as_bytes_span(&self) -> Option<Span> {
        match self {
            Token::Bytes(span) => Some(*span),
            _ => None,
        }
    }
}
