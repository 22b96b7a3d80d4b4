use std::collections::HashSet;
use std::rc::Rc;

use blueprint_core::types::Token;

/// Run-scoped string interner for output tokens.
///
/// A scan can touch tens of millions of tiles but only produces a few hundred
/// distinct tokens, so every tile shares the allocation of its token text.
/// One cache belongs to one run; `reset` drops everything it interned.
#[derive(Debug, Default)]
pub struct TokenCache {
    tokens: HashSet<Token>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared token for `text`. Equal text returns the same allocation until
    /// the next `reset`.
    pub fn intern(&mut self, text: &str) -> Token {
        if let Some(token) = self.tokens.get(text) {
            return Rc::clone(token);
        }
        let token: Token = Rc::from(text);
        self.tokens.insert(Rc::clone(&token));
        token
    }

    /// Forget every interned token.
    pub fn reset(&mut self) {
        self.tokens.clear();
    }

    /// Number of distinct tokens interned.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
