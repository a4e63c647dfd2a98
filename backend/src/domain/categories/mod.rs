//! Community category browser.
//!
//! Records come from the remote category table when one is configured and
//! from the built-in list otherwise. Filtering combines a category selector
//! with a free-text search; facet counts always describe the full list.

mod builtin;
mod catalogue;
mod filter;
mod record;

use thiserror::Error;

pub use builtin::builtin_categories;
pub use catalogue::{CategoryCatalogue, CategoryOrigin, LoadedCategories};
pub use filter::{ALL_TAG, CategoryQuery, CategorySelector, Facet, facet_counts};
pub use record::{CategoryRecord, CategoryRecordDraft, ProcessCategory, Timeframe};

/// Validation errors raised while building category values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryValidationError {
    /// Tag is not one of the known categories.
    #[error("unknown category: {value}")]
    UnknownCategory { value: String },
    /// Required text field was blank.
    #[error("category {field} must not be empty")]
    EmptyField { field: &'static str },
    /// Slug contains characters outside `[a-z0-9-]` or surrounding whitespace.
    #[error("invalid category slug: {slug:?}")]
    InvalidSlug { slug: String },
}
