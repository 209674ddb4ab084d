use smallvec::SmallVec;

use crate::constants::INLINE_ELEMENTS;
use crate::error::{violation, ContractViolation};
use crate::token::TokenId;

/// Append-only array of token handles backing a sequence token.
#[derive(Debug, Default, Clone)]
pub struct CountedArray {
    elements: SmallVec<[TokenId; INLINE_ELEMENTS]>,
}

impl CountedArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: SmallVec::with_capacity(capacity),
        }
    }

    pub fn used(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    pub fn elements(&self) -> &[TokenId] {
        &self.elements
    }

    pub fn append(&mut self, element: TokenId) {
        self.elements.push(element);
    }

    pub fn extend_from_slice(&mut self, elements: &[TokenId]) {
        self.elements.extend_from_slice(elements);
    }

    #[track_caller]
    pub fn index(&self, index: usize) -> TokenId {
        match self.elements.get(index) {
            Some(element) => *element,
            None => violation(ContractViolation::IndexOutOfBounds {
                index,
                len: self.elements.len(),
            }),
        }
    }

    pub fn get(&self, index: usize) -> Option<TokenId> {
        self.elements.get(index).copied()
    }
}
