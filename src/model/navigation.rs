//! Navigation intents emitted when a card is opened.

use crate::model::Slug;
use std::fmt;

/// Request to show an item's detail page.
///
/// The discovery core never resolves the destination itself; whoever owns
/// routing consumes this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    slug: Slug,
}

impl NavigationIntent {
    /// Intent to open the item with this slug.
    pub fn new(slug: Slug) -> Self {
        Self { slug }
    }

    /// Target item's slug.
    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Detail route for the target item, e.g. `/event/sunrise-yoga`.
    pub fn route(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NavigationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/event/{}", self.slug)
    }
}
