//! Parse-result trees for parser combinators.
//!
//! A parse produces tokens into one [`Arena`]: byte strings, signed and
//! unsigned integers, sequences of other tokens, and application-defined
//! user tokens. Semantic [`action`]s then reshape that tree into whatever
//! the application needs.
//!
//! Two failure channels exist and are kept apart. Misusing the API (casting
//! a token to the wrong kind, indexing past the end of a sequence, tagging a
//! user token with a built-in tag) panics immediately. Actions that meet an
//! unexpected shape return `None`, which a grammar engine treats as "no
//! value".
//!
//! ```
//! use parsed_token::{action, Arena, ParseResult};
//!
//! let mut arena = Arena::new();
//! let inner = arena.make_seq();
//! let b = arena.make_bytes_from(b"b");
//! arena.seq_snoc(inner, b);
//! let root = arena.make_seq();
//! let a = arena.make_bytes_from(b"a");
//! arena.seq_snoc(root, a);
//! arena.seq_snoc(root, inner);
//!
//! let mut result = ParseResult::new(arena, Some(root));
//! let flat = result.apply(&action::flatten).unwrap();
//! assert_eq!(result.arena.seq_elements(flat), &[a, b]);
//! ```

pub mod action;
pub mod arena;
pub mod constants;
pub mod encode;
pub mod error;
pub mod json;
pub mod options;
mod seq;
pub mod token;

pub use crate::action::{Action, ParseResult};
pub use crate::arena::{Arena, ArenaStats, CountedArray, TokenRef};
pub use crate::error::{ContractViolation, Error, ErrorKind};
pub use crate::options::{ArenaOptions, Indent, PrintOptions};
pub use crate::token::{Span, Token, TokenId, TokenType, TokenTypeRegistry};
pub use encode::to_pretty_string;

pub type Result<T> = std::result::Result<T, Error>;
