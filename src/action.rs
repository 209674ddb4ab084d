//! Semantic actions over completed parse results.
//!
//! An engine hands each action a [`ParseResult`]; the action returns the
//! token to put in its place, or `None` for "no value". Unlike the arena
//! accessors, the helpers here never panic on a shape they did not expect:
//! a missing result, a non-sequence or an out-of-range index all come back
//! as `None`.

use crate::arena::Arena;
use crate::token::{Token, TokenId};

/// The outcome of one successful parse: a possibly absent tree plus the arena
/// that owns it.
#[derive(Debug, Default)]
pub struct ParseResult {
    pub ast: Option<TokenId>,
    pub arena: Arena,
}

impl ParseResult {
    pub fn new(arena: Arena, ast: Option<TokenId>) -> Self {
        Self { ast, arena }
    }

    /// Runs `action` and replaces the tree with what it returns.
    pub fn apply<A: Action + ?Sized>(&mut self, action: &A) -> Option<TokenId> {
        self.ast = action.call(self);
        self.ast
    }

    pub fn into_parts(self) -> (Arena, Option<TokenId>) {
        (self.arena, self.ast)
    }
}

pub trait Action {
    fn call(&self, result: &mut ParseResult) -> Option<TokenId>;
}

impl<F> Action for F
where
    F: Fn(&mut ParseResult) -> Option<TokenId>,
{
    fn call(&self, result: &mut ParseResult) -> Option<TokenId> {
        self(result)
    }
}

/// Drops the result.
pub fn ignore(_result: &mut ParseResult) -> Option<TokenId> {
    None
}

/// Replaces the result with a flat sequence of its leaves.
pub fn flatten(result: &mut ParseResult) -> Option<TokenId> {
    let ast = result.ast?;
    Some(result.arena.seq_flatten(ast))
}

/// Picks one element out of a sequence result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index(pub usize);

impl Action for Index {
    fn call(&self, result: &mut ParseResult) -> Option<TokenId> {
        let array = result.arena.token(result.ast?).as_sequence()?;
        result.arena.array(array).get(self.0)
    }
}

pub fn index(index: usize) -> Index {
    Index(index)
}

pub fn first() -> Index {
    Index(0)
}

pub fn second() -> Index {
    Index(1)
}

/// Picks the final element of a sequence result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Last;

impl Action for Last {
    fn call(&self, result: &mut ParseResult) -> Option<TokenId> {
        match result.arena.token(result.ast?) {
            Token::Sequence(array) => result.arena.array(*array).elements().last().copied(),
            _ => None,
        }
    }
}

pub fn last() -> Last {
    Last
}
