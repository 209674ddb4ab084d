//! Sequence operations on arena tokens.
//!
//! Sequences hold handles, not copies: appending, concatenating and
//! flattening move handles around and never touch the payloads they point
//! at. Elements are only ever added at the end.

use std::any::Any;

use smallvec::{smallvec, SmallVec};

use crate::arena::{Arena, CountedArray};
use crate::token::{Token, TokenId, TokenType};

impl Arena {
    #[track_caller]
    pub fn seq_len(&self, seq: TokenId) -> usize {
        self.cast_seq(seq).used()
    }

    #[track_caller]
    pub fn seq_elements(&self, seq: TokenId) -> &[TokenId] {
        self.cast_seq(seq).elements()
    }

    #[track_caller]
    pub fn seq_index(&self, seq: TokenId, index: usize) -> TokenId {
        self.cast_seq(seq).index(index)
    }

    /// Follows `path` through nested sequences, one index per level.
    #[track_caller]
    pub fn seq_index_path(&self, seq: TokenId, path: &[usize]) -> TokenId {
        let mut current = seq;
        for index in path {
            current = self.seq_index(current, *index);
        }
        current
    }

    #[track_caller]
    pub fn seq_index_seq(&self, seq: TokenId, index: usize) -> &CountedArray {
        self.cast_seq(self.seq_index(seq, index))
    }

    #[track_caller]
    pub fn seq_index_bytes(&self, seq: TokenId, index: usize) -> &[u8] {
        self.cast_bytes(self.seq_index(seq, index))
    }

    #[track_caller]
    pub fn seq_index_sint(&self, seq: TokenId, index: usize) -> i64 {
        self.cast_sint(self.seq_index(seq, index))
    }

    #[track_caller]
    pub fn seq_index_uint(&self, seq: TokenId, index: usize) -> u64 {
        self.cast_uint(self.seq_index(seq, index))
    }

    #[track_caller]
    pub fn seq_index_user<T: Any>(
        &self,
        token_type: TokenType,
        seq: TokenId,
        index: usize,
    ) -> &T {
        self.cast_user(token_type, self.seq_index(seq, index))
    }

    /// Appends one handle to the end of `seq`.
    #[track_caller]
    pub fn seq_snoc(&mut self, seq: TokenId, value: TokenId) {
        let array = self.seq_array(seq);
        self.array_mut(array).append(value);
    }

    /// Appends every element of `src` to `dst`, in order.
    ///
    /// `src` is read once before anything is appended, so `seq_append(s, s)`
    /// doubles `s`.
    #[track_caller]
    pub fn seq_append(&mut self, dst: TokenId, src: TokenId) {
        let dst_array = self.seq_array(dst);
        let elements: SmallVec<[TokenId; 16]> = SmallVec::from_slice(self.seq_elements(src));
        self.array_mut(dst_array).extend_from_slice(&elements);
    }

    /// Collapses nested sequences into one fresh flat sequence of leaves.
    ///
    /// A non-sequence token yields a singleton sequence holding that token.
    /// The result is always newly allocated, even for already-flat input.
    pub fn seq_flatten(&mut self, token: TokenId) -> TokenId {
        let mut leaves: Vec<TokenId> = Vec::new();
        let mut pending: SmallVec<[TokenId; 16]> = smallvec![token];
        while let Some(next) = pending.pop() {
            match self.token(next) {
                Token::Sequence(array) => {
                    pending.extend(self.array(*array).elements().iter().rev().copied());
                }
                _ => leaves.push(next),
            }
        }

        let flat = self.make_seq_with_capacity(leaves.len());
        let array = self.seq_array(flat);
        self.array_mut(array).extend_from_slice(&leaves);
        flat
    }
}
