//! Memoized card content lookup.

use std::collections::HashMap;

use crate::model::{Card, Issue};
use crate::source::BoardSource;

/// Resolves project cards to their linked issue, once per card id.
///
/// Lookup failures degrade to `None` and are cached like any other result.
/// One resolver lives for exactly one render.
pub struct ContentResolver<'a, S: BoardSource + ?Sized> {
    source: &'a S,
    memo: HashMap<u64, Option<Issue>>,
}

impl<'a, S: BoardSource + ?Sized> ContentResolver<'a, S> {
    /// Creates an empty resolver over `source`.
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            memo: HashMap::new(),
        }
    }

    /// Returns the content linked to `card`, fetching it on first use.
    pub fn resolve(&mut self, card: &Card) -> Option<&Issue> {
        let source = self.source;
        self.memo
            .entry(card.id)
            .or_insert_with(|| match source.card_content(card) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(card = card.id, "Failed to resolve card content: {:#}", e);
                    None
                }
            })
            .as_ref()
    }
}
