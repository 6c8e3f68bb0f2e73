//! JSON catalog decoding.
//!
//! A catalog file is a JSON array of item records using the web app's field
//! names (`coverImageUrl`, `type`). Records are decoded into a raw shape
//! first and validated into [`Item`]s here, so nothing downstream has to
//! deal with empty ids or bad slugs.

use crate::model::error::CatalogError;
use crate::model::{Catalog, Item, ItemId, Slug};
use serde::Deserialize;
use std::path::Path;

/// On-disk item record, before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    id: String,
    slug: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    cover_image_url: Option<String>,
}

impl RawItem {
    fn validate(self, index: usize) -> Result<Item, CatalogError> {
        let id = ItemId::new(self.id).map_err(|e| CatalogError::InvalidItem {
            index,
            reason: e.to_string(),
        })?;
        let slug = Slug::new(self.slug).map_err(|e| CatalogError::InvalidItem {
            index,
            reason: e.to_string(),
        })?;

        Ok(Item::new(
            id,
            slug,
            self.title,
            self.description.unwrap_or_default(),
            self.kind,
            self.cover_image_url.unwrap_or_default(),
        ))
    }
}

/// Decode and validate a catalog from JSON text.
///
/// `origin` names the source in error messages (a path, or "bundled").
pub fn parse_catalog(json: &str, origin: &str) -> Result<Catalog, CatalogError> {
    let raw: Vec<RawItem> = serde_json::from_str(json).map_err(|e| CatalogError::InvalidJson {
        origin: origin.to_string(),
        message: e.to_string(),
    })?;

    let items = raw
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.validate(index))
        .collect::<Result<Vec<_>, _>>()?;

    Catalog::new(items)
}

/// Read a catalog file from disk.
///
/// # Errors
///
/// Returns `CatalogError::FileNotFound` if the path does not exist,
/// `CatalogError::Io` for other read failures, and decode/validation errors
/// from [`parse_catalog`].
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    parse_catalog(&contents, &path.display().to_string())
}
