//! Immutable item collection.

use crate::model::error::CatalogError;
use crate::model::Item;
use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;

/// Ordered, immutable collection of items.
///
/// Cloning is cheap (shared slice). Ids are unique; order is the order the
/// source supplied. Nothing can insert or remove items after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Arc<[Item]>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if !seen.insert(item.id().as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: item.id().to_string(),
                    index,
                });
            }
        }

        Ok(Self {
            items: items.into(),
        })
    }

    /// A catalog with no items.
    pub fn empty() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    /// All items, in source order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

impl Deref for Catalog {
    type Target = [Item];

    fn deref(&self) -> &[Item] {
        &self.items
    }
}
