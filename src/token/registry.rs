use std::collections::HashMap;

use smol_str::SmolStr;

use super::TokenType;

/// Name-to-tag table for user token types.
///
/// Tags are handed out sequentially starting at [`TokenType::USER`], so a
/// registry built in the same order on every run yields stable tags.
#[derive(Debug, Default, Clone)]
pub struct TokenTypeRegistry {
    names: Vec<SmolStr>,
    by_name: HashMap<SmolStr, TokenType>,
}

impl TokenTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tag registered under `name`, allocating the next free tag
    /// the first time a name is seen.
    pub fn allocate(&mut self, name: &str) -> TokenType {
        if let Some(tag) = self.by_name.get(name) {
            return *tag;
        }
        let offset = u32::try_from(self.names.len()).unwrap_or(u32::MAX);
        let tag = TokenType(TokenType::USER.0.saturating_add(offset));
        let name = SmolStr::new(name);
        self.names.push(name.clone());
        self.by_name.insert(name, tag);
        tag
    }

    pub fn lookup(&self, name: &str) -> Option<TokenType> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, tag: TokenType) -> Option<&str> {
        if let Some(name) = tag.builtin_name() {
            return Some(name);
        }
        if !tag.is_user() {
            return None;
        }
        let index = usize::try_from(tag.0 - TokenType::USER.0).ok()?;
        self.names.get(index).map(|name| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
