//! Catalog sources.
//!
//! The item collection is injected into the discovery state at
//! construction. This module provides the two places it can come from:
//! - A JSON file on disk
//! - The sample catalog compiled into the binary

use crate::model::error::CatalogError;
use crate::model::Catalog;
use std::path::PathBuf;
use tracing::info;

pub mod file;

pub use file::{load_catalog_file, parse_catalog};

/// Sample catalog shipped with the binary.
const BUNDLED_CATALOG: &str = include_str!("bundled_catalog.json");

/// Where to load the catalog from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// JSON array file on disk.
    File(PathBuf),
    /// Built-in sample catalog.
    Bundled,
}

impl CatalogSource {
    /// Pick a source: the given path if any, otherwise the bundled catalog.
    pub fn detect(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => CatalogSource::File(path),
            None => CatalogSource::Bundled,
        }
    }

    /// Load and validate the catalog. Called once, at startup.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file is missing, unreadable, or invalid.
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        let catalog = match self {
            CatalogSource::File(path) => load_catalog_file(path)?,
            CatalogSource::Bundled => parse_catalog(BUNDLED_CATALOG, "bundled")?,
        };

        info!(source = ?self, items = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }
}
