//! Catalog item record.

use crate::model::{ItemId, Slug};

/// A browsable event record. Read-only once constructed.
///
/// `kind` is the event type shown on the card badge (e.g. "yoga",
/// "hiking"). It is serialized as `type` in catalog files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    slug: Slug,
    title: String,
    description: String,
    kind: String,
    cover_image_url: String,
}

impl Item {
    /// Build an item from already-validated identifiers.
    pub fn new(
        id: ItemId,
        slug: Slug,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: impl Into<String>,
        cover_image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            slug,
            title: title.into(),
            description: description.into(),
            kind: kind.into(),
            cover_image_url: cover_image_url.into(),
        }
    }

    /// Unique id within the catalog.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Route segment for the detail page.
    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free-text description; may be empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Event type, shown as the card badge.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Cover image URL. Carried through but not drawn in the terminal.
    pub fn cover_image_url(&self) -> &str {
        &self.cover_image_url
    }

    /// Whether any searchable field contains `needle_lower`.
    ///
    /// `needle_lower` must already be lowercased; fields are lowercased here.
    /// Searched fields: title, description, type.
    pub fn matches_lowercase(&self, needle_lower: &str) -> bool {
        [&self.title, &self.description, &self.kind]
            .iter()
            .any(|field| field.to_lowercase().contains(needle_lower))
    }
}
