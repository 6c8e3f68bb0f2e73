//! Error types for eventdeck.
//!
//! Errors are structured with `thiserror` and compose via `?` and `From`
//! conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error wrapping every fatal failure
//!   - [`CatalogError`] - Catalog file reading and validation failures
//!   - [`PagingError`] - Invalid carousel construction (zero page size)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - `std::io::Error` - Terminal/TUI failures
//!
//! # Recovery Strategy
//!
//! Everything here is fatal at startup. Once the catalog is loaded and the
//! carousel is constructed, no operation on the discovery state can fail:
//! navigation past either end is absorbed, and filtering is total.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Domain errors convert into `AppError` via `From`, so `main` can use `?`
/// throughout the startup sequence.
#[derive(Debug, Error)]
pub enum AppError {
    /// The item catalog could not be loaded.
    #[error("Failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// The configuration file exists but is unusable.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The carousel could not be constructed from the resolved configuration.
    #[error("Invalid carousel configuration: {0}")]
    Paging(#[from] PagingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading or validating an item catalog.
///
/// Items are validated at the boundary: once a [`Catalog`](crate::model::Catalog)
/// exists, every item in it has a usable id and slug, and ids are unique.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file does not exist.
    #[error("Catalog file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The catalog file is not a JSON array of item records.
    #[error("Invalid catalog JSON in {origin}: {message}")]
    InvalidJson {
        /// Where the JSON came from (file path or "bundled").
        origin: String,
        /// Decoder message, including line/column.
        message: String,
    },

    /// An item record failed validation.
    #[error("Invalid item at index {index}: {reason}")]
    InvalidItem {
        /// Zero-based position in the catalog array.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Two items share the same id.
    #[error("Duplicate item id '{id}' at index {index}")]
    DuplicateId {
        /// The repeated id.
        id: String,
        /// Zero-based position of the second occurrence.
        index: usize,
    },

    /// Generic I/O failure while reading the catalog.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Contract violations when constructing a paged selector.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PagingError {
    /// A page must hold at least one item.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}
