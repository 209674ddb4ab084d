//! Bulk storage for one parse's worth of tokens.
//!
//! Every token, counted array, byte buffer and user payload produced while
//! parsing lives in a single [`Arena`]. Tokens are addressed by [`TokenId`]
//! handles and are reclaimed together when the arena is dropped or cleared;
//! nothing is ever freed individually.
//!
//! Handles are only meaningful for the arena that produced them. Passing a
//! handle to another arena is unchecked.

pub mod carray;

use std::any::{type_name, Any};

pub use carray::CountedArray;

use crate::error::{violation, ContractViolation};
use crate::options::ArenaOptions;
use crate::token::{ArrayId, Span, Token, TokenId, TokenType};

#[derive(Debug, Default)]
pub struct Arena {
    tokens: Vec<Token>,
    arrays: Vec<CountedArray>,
    bytes: Vec<u8>,
    users: Vec<Box<dyn Any>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArenaStats {
    pub tokens: usize,
    pub arrays: usize,
    pub bytes: usize,
    pub users: usize,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: &ArenaOptions) -> Self {
        Self {
            tokens: Vec::with_capacity(options.token_capacity),
            arrays: Vec::with_capacity(options.array_capacity),
            bytes: Vec::with_capacity(options.byte_capacity),
            users: Vec::new(),
        }
    }

    /// Drops every token at once, keeping the allocations for reuse.
    /// All previously issued handles become invalid.
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.arrays.clear();
        self.bytes.clear();
        self.users.clear();
    }

    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            tokens: self.tokens.len(),
            arrays: self.arrays.len(),
            bytes: self.bytes.len(),
            users: self.users.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn alloc(&mut self, token: Token) -> TokenId {
        let id = TokenId(self.tokens.len());
        self.tokens.push(token);
        id
    }

    fn alloc_array(&mut self, array: CountedArray) -> ArrayId {
        let id = ArrayId(self.arrays.len());
        self.arrays.push(array);
        id
    }

    pub fn make_seq(&mut self) -> TokenId {
        let array = self.alloc_array(CountedArray::new());
        self.alloc(Token::Sequence(array))
    }

    pub fn make_seq_with_capacity(&mut self, capacity: usize) -> TokenId {
        let array = self.alloc_array(CountedArray::with_capacity(capacity));
        self.alloc(Token::Sequence(array))
    }

    /// Allocates a zero-filled buffer of `len` bytes; fill it through
    /// [`Arena::bytes_mut`].
    #[track_caller]
    pub fn make_bytes(&mut self, len: usize) -> TokenId {
        let start = self.bytes.len();
        let Some(end) = start.checked_add(len) else {
            violation(ContractViolation::BufferOverflow { len });
        };
        self.bytes.resize(end, 0);
        self.alloc(Token::Bytes(Span { start, end }))
    }

    pub fn make_bytes_from(&mut self, data: &[u8]) -> TokenId {
        let start = self.bytes.len();
        self.bytes.extend_from_slice(data);
        self.alloc(Token::Bytes(Span {
            start,
            end: self.bytes.len(),
        }))
    }

    pub fn make_sint(&mut self, value: i64) -> TokenId {
        self.alloc(Token::SInt(value))
    }

    pub fn make_uint(&mut self, value: u64) -> TokenId {
        self.alloc(Token::UInt(value))
    }

    /// Wraps an application value in a token tagged `token_type`, which must
    /// be at or above [`TokenType::USER`].
    #[track_caller]
    pub fn make_user<T: Any>(&mut self, token_type: TokenType, value: T) -> TokenId {
        if !token_type.is_user() {
            violation(ContractViolation::ReservedTokenType(token_type));
        }
        let slot = self.users.len();
        self.users.push(Box::new(value));
        self.alloc(Token::User { token_type, slot })
    }

    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id.0]
    }

    pub fn token_type(&self, id: TokenId) -> TokenType {
        self.token(id).token_type()
    }

    pub fn view(&self, id: TokenId) -> TokenRef<'_> {
        TokenRef { arena: self, id }
    }

    pub fn array(&self, id: ArrayId) -> &CountedArray {
        &self.arrays[id.0]
    }

    pub(crate) fn array_mut(&mut self, id: ArrayId) -> &mut CountedArray {
        &mut self.arrays[id.0]
    }

    pub(crate) fn span_bytes(&self, span: Span) -> &[u8] {
        &self.bytes[span.start..span.end]
    }

    #[track_caller]
    pub(crate) fn expect_kind(&self, id: TokenId, expected: TokenType) -> Token {
        let token = *self.token(id);
        let found = token.token_type();
        if found != expected {
            violation(ContractViolation::KindMismatch { expected, found });
        }
        token
    }

    #[track_caller]
    pub(crate) fn seq_array(&self, id: TokenId) -> ArrayId {
        match self.expect_kind(id, TokenType::SEQUENCE) {
            Token::Sequence(array) => array,
            _ => unreachable!("kind checked above"),
        }
    }

    #[track_caller]
    pub fn cast_seq(&self, id: TokenId) -> &CountedArray {
        self.array(self.seq_array(id))
    }

    #[track_caller]
    pub fn cast_bytes(&self, id: TokenId) -> &[u8] {
        match self.expect_kind(id, TokenType::BYTES) {
            Token::Bytes(span) => self.span_bytes(span),
            _ => unreachable!("kind checked above"),
        }
    }

    #[track_caller]
    pub fn bytes_mut(&mut self, id: TokenId) -> &mut [u8] {
        match self.expect_kind(id, TokenType::BYTES) {
            Token::Bytes(span) => &mut self.bytes[span.start..span.end],
            _ => unreachable!("kind checked above"),
        }
    }

    #[track_caller]
    pub fn cast_sint(&self, id: TokenId) -> i64 {
        match self.expect_kind(id, TokenType::SINT) {
            Token::SInt(value) => value,
            _ => unreachable!("kind checked above"),
        }
    }

    #[track_caller]
    pub fn cast_uint(&self, id: TokenId) -> u64 {
        match self.expect_kind(id, TokenType::UINT) {
            Token::UInt(value) => value,
            _ => unreachable!("kind checked above"),
        }
    }

    #[track_caller]
    pub fn cast_user<T: Any>(&self, token_type: TokenType, id: TokenId) -> &T {
        let slot = self.user_slot(token_type, id);
        match self.users[slot].downcast_ref::<T>() {
            Some(value) => value,
            None => violation(ContractViolation::PayloadMismatch {
                token_type,
                expected: type_name::<T>(),
            }),
        }
    }

    #[track_caller]
    pub fn cast_user_mut<T: Any>(&mut self, token_type: TokenType, id: TokenId) -> &mut T {
        let slot = self.user_slot(token_type, id);
        match self.users[slot].downcast_mut::<T>() {
            Some(value) => value,
            None => violation(ContractViolation::PayloadMismatch {
                token_type,
                expected: type_name::<T>(),
            }),
        }
    }

    #[track_caller]
    fn user_slot(&self, token_type: TokenType, id: TokenId) -> usize {
        match self.expect_kind(id, token_type) {
            Token::User { slot, .. } => slot,
            // A built-in tag matched a built-in token.
            _ => violation(ContractViolation::ReservedTokenType(token_type)),
        }
    }
}

/// Read-only view of one token together with the arena that owns it.
#[derive(Debug, Clone, Copy)]
pub struct TokenRef<'a> {
    arena: &'a Arena,
    id: TokenId,
}

impl<'a> TokenRef<'a> {
    pub fn id(&self) -> TokenId {
        self.id
    }

    pub fn arena(&self) -> &'a Arena {
        self.arena
    }

    pub fn token(&self) -> &'a Token {
        self.arena.token(self.id)
    }

    pub fn token_type(&self) -> TokenType {
        self.token().token_type()
    }

    /// Child views of a sequence; empty for every other kind.
    pub fn children(&self) -> impl Iterator<Item = TokenRef<'a>> + 'a {
        let arena = self.arena;
        let elements: &'a [TokenId] = match self.token() {
            Token::Sequence(array) => arena.array(*array).elements(),
            _ => &[],
        };
        elements.iter().map(move |id| TokenRef { arena, id: *id })
    }

    pub fn bytes(&self) -> Option<&'a [u8]> {
        self.token()
            .as_bytes_span()
            .map(|span| self.arena.span_bytes(span))
    }
}
