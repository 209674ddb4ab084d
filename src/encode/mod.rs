//! Text renderings of token trees.
//!
//! `Display` on [`TokenRef`] gives the compact unambiguous form used in test
//! expectations and panic messages:
//!
//! ```text
//! (<61.62> s-0x5 (u0x7) user:64)
//! ```
//!
//! The compact form always stops at [`MAX_DEPTH`]: a sequence nested that
//! deep prints as `...` regardless of any [`PrintOptions`].
//!
//! [`to_pretty_string`] gives an indented one-token-per-line dump.

mod writer;

use std::fmt;

use crate::arena::TokenRef;
use crate::constants::{ELIDED, MAX_DEPTH};
use crate::options::PrintOptions;
use crate::token::{Token, TokenTypeRegistry};

impl fmt::Display for TokenRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_unambiguous(f, *self, 0)
    }
}

fn write_unambiguous(f: &mut fmt::Formatter<'_>, token: TokenRef<'_>, depth: usize) -> fmt::Result {
    match token.token() {
        Token::Sequence(_) => {
            if depth >= MAX_DEPTH {
                return f.write_str(ELIDED);
            }
            f.write_str("(")?;
            for (i, child) in token.children().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write_unambiguous(f, child, depth + 1)?;
            }
            f.write_str(")")
        }
        Token::Bytes(_) => writer::write_hex_bytes(f, token.bytes().unwrap_or(&[])),
        Token::SInt(value) if *value < 0 => write!(f, "s-{:#x}", value.unsigned_abs()),
        Token::SInt(value) => write!(f, "s{value:#x}"),
        Token::UInt(value) => write!(f, "u{value:#x}"),
        Token::User { token_type, .. } => write!(f, "user:{}", token_type.0),
    }
}

pub fn to_pretty_string(
    token: TokenRef<'_>,
    options: &PrintOptions,
    registry: Option<&TokenTypeRegistry>,
) -> String {
    let mut writer = writer::Writer::new(*options);
    write_pretty(&mut writer, token, registry, 0);
    writer.finish()
}

fn write_pretty(
    writer: &mut writer::Writer,
    token: TokenRef<'_>,
    registry: Option<&TokenTypeRegistry>,
    depth: usize,
) {
    writer.write_indent(depth);
    match token.token() {
        Token::Sequence(array) => {
            let len = token.arena().array(*array).used();
            writer.write_str("SEQUENCE[");
            writer.write_usize(len);
            writer.write_char(']');
            if len > 0 && depth >= writer.options.max_depth {
                writer.write_char(' ');
                writer.write_str(ELIDED);
                return;
            }
            for child in token.children() {
                writer.write_newline();
                write_pretty(writer, child, registry, depth + 1);
            }
        }
        Token::Bytes(_) => {
            writer.write_str("BYTES ");
            writer.write_bytes(token.bytes().unwrap_or(&[]));
        }
        Token::SInt(value) => {
            writer.write_str("SINT ");
            writer.write_i64(*value);
        }
        Token::UInt(value) => {
            writer.write_str("UINT ");
            writer.write_u64(*value);
        }
        Token::User { token_type, .. } => {
            match registry.and_then(|registry| registry.name(*token_type)) {
                Some(name) => writer.write_str(name),
                None => writer.write_str(&token_type.to_string()),
            }
        }
    }
}

impl TokenRef<'_> {
    pub fn to_pretty_string(&self, options: &PrintOptions) -> String {
        to_pretty_string(*self, options, None)
    }
}
