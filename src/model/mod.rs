//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod catalog;
pub mod error;
pub mod identifiers;
pub mod item;
pub mod key_action;
pub mod navigation;

// Re-export for convenience
pub use catalog::Catalog;
pub use error::{AppError, CatalogError, PagingError};
pub use identifiers::{InvalidItemId, InvalidSlug, ItemId, Slug};
pub use item::Item;
pub use key_action::KeyAction;
pub use navigation::NavigationIntent;
