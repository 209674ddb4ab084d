//! Bridge between token trees and `serde`.
//!
//! Serializing a [`TokenRef`] is lossy by design of the target formats:
//! sequences become arrays, integers become numbers, bytes become a string
//! when they are UTF-8 and a byte array otherwise, and user payloads (which
//! are opaque) become `{"user": <tag>}`. Trees nested deeper than
//! [`MAX_DEPTH`] fail to serialize instead of recursing without bound.
//!
//! [`Arena::import_json`] goes the other way and is mostly a fixture builder:
//! arrays become sequences, strings become bytes, negative integers become
//! `SInt`, other integers `UInt`. `{"sint": n}` and `{"uint": n}` force a
//! kind.

use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::arena::{Arena, TokenRef};
use crate::constants::MAX_DEPTH;
use crate::token::{Token, TokenId};
use crate::{Error, Result};

impl Serialize for TokenRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Nested {
            token: *self,
            depth: 0,
        }
        .serialize(serializer)
    }
}

/// A token together with how deep it sits below the serialized root.
struct Nested<'a> {
    token: TokenRef<'a>,
    depth: usize,
}

impl Serialize for Nested<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.depth > MAX_DEPTH {
            return Err(S::Error::custom(format!("nesting deeper than {MAX_DEPTH}")));
        }
        let token = self.token;
        match token.token() {
            Token::Sequence(array) => {
                let len = token.arena().array(*array).used();
                let mut seq = serializer.serialize_seq(Some(len))?;
                for child in token.children() {
                    seq.serialize_element(&Nested {
                        token: child,
                        depth: self.depth + 1,
                    })?;
                }
                seq.end()
            }
            Token::Bytes(_) => {
                let data = token.bytes().unwrap_or(&[]);
                match std::str::from_utf8(data) {
                    Ok(text) => serializer.serialize_str(text),
                    Err(_) => serializer.serialize_bytes(data),
                }
            }
            Token::SInt(value) => serializer.serialize_i64(*value),
            Token::UInt(value) => serializer.serialize_u64(*value),
            Token::User { token_type, .. } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("user", &token_type.0)?;
                map.end()
            }
        }
    }
}

pub fn to_value(token: TokenRef<'_>) -> Result<Value> {
    serde_json::to_value(token)
        .map_err(|err| Error::serialize(format!("serialize failed: {err}")))
}

pub fn to_string(token: TokenRef<'_>) -> Result<String> {
    serde_json::to_string(&token)
        .map_err(|err| Error::serialize(format!("serialize failed: {err}")))
}

impl Arena {
    pub fn import_json(&mut self, value: &Value) -> Result<TokenId> {
        import_value(self, value, 0)
    }
}

fn import_value(arena: &mut Arena, value: &Value, depth: usize) -> Result<TokenId> {
    if depth > MAX_DEPTH {
        return Err(Error::import(format!("nesting deeper than {MAX_DEPTH}")));
    }
    match value {
        Value::Array(items) => {
            let seq = arena.make_seq_with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let child = import_value(arena, item, depth + 1).map_err(|err| err.at(i))?;
                arena.seq_snoc(seq, child);
            }
            Ok(seq)
        }
        Value::String(text) => Ok(arena.make_bytes_from(text.as_bytes())),
        Value::Number(number) => {
            if let Some(value) = number.as_u64() {
                Ok(arena.make_uint(value))
            } else if let Some(value) = number.as_i64() {
                Ok(arena.make_sint(value))
            } else {
                Err(Error::import(format!("non-integer number {number}")))
            }
        }
        Value::Object(map) if map.len() == 1 => {
            let (key, inner) = map.iter().next().ok_or_else(|| Error::import("empty object"))?;
            match (key.as_str(), inner) {
                ("sint", Value::Number(n)) => n
                    .as_i64()
                    .map(|value| arena.make_sint(value))
                    .ok_or_else(|| Error::import(format!("{n} does not fit a signed token"))),
                ("uint", Value::Number(n)) => n
                    .as_u64()
                    .map(|value| arena.make_uint(value))
                    .ok_or_else(|| Error::import(format!("{n} does not fit an unsigned token"))),
                _ => Err(Error::import(format!("unsupported object key {key:?}"))),
            }
        }
        Value::Object(_) => Err(Error::import("objects must have exactly one key")),
        Value::Bool(_) => Err(Error::import("booleans have no token kind")),
        Value::Null => Err(Error::import("null has no token kind")),
    }
}
