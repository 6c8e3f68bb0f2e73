//! Item identifier newtypes with smart constructors.
//!
//! Identifiers are validated at construction time. Raw constructors are
//! never exported - use smart constructors only.

use std::fmt;

/// Unique identifier for a catalog item, stable across renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    /// Smart constructor: validates non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidItemId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidItemId::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL-safe item identifier used as a navigation target.
///
/// Slugs end up as a single route segment (`/event/{slug}`), so they may
/// not contain whitespace or path separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Smart constructor: validates a non-empty single route segment.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidSlug> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidSlug::Empty);
        }
        if let Some(ch) = raw.chars().find(|c| c.is_whitespace() || *c == '/') {
            return Err(InvalidSlug::IllegalChar(ch));
        }
        Ok(Self(raw))
    }

    /// Borrow the raw slug.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Reasons an item id is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidItemId {
    /// Empty or whitespace-only.
    #[error("item id cannot be empty")]
    Empty,
}

/// Reasons a slug is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSlug {
    /// Zero-length slug.
    #[error("slug cannot be empty")]
    Empty,
    /// Whitespace or `/`, which would break the route segment.
    #[error("slug contains illegal character {0:?}")]
    IllegalChar(char),
}

// ===== Tests =====
