//! Search filter over the catalog.
//!
//! The query is trimmed only to decide whether a search is in progress.
//! Matching uses the query as typed (lowercased), so a trailing space is
//! part of the needle.

use crate::model::Item;

// ===== FilterState =====

/// Live search query plus the edit cursor (in characters).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    cursor: usize,
}

impl FilterState {
    /// Empty query, cursor at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Query with the cursor placed after its last character.
    pub fn with_query(query: impl Into<String>) -> Self {
        let query = query.into();
        let cursor = query.chars().count();
        Self { query, cursor }
    }

    /// Query text as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Cursor position as a character index, `0..=query.chars().count()`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when the query is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }

    pub(crate) fn from_parts(query: String, cursor: usize) -> Self {
        Self { query, cursor }
    }

    pub(crate) fn into_parts(self) -> (String, usize) {
        (self.query, self.cursor)
    }
}

// ===== Filtering =====

/// Items whose title, description or type contains `query`, ignoring case.
///
/// A blank query yields an empty result. That means "show the carousel",
/// not "nothing matched". Results keep catalog order; there is no ranking.
pub fn filter<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_lowercase(&needle))
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
