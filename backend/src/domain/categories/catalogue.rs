//! Category loading with built-in fallback.

use std::sync::Arc;

use tracing::{debug, warn};

use super::builtin::builtin_categories;
use super::record::CategoryRecord;
use crate::domain::ports::CategorySource;

/// Where a loaded list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryOrigin {
    /// Rows read from the remote category table.
    Remote,
    /// The built-in list.
    BuiltIn,
}

impl CategoryOrigin {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::BuiltIn => "builtin",
        }
    }
}

/// Result of [`CategoryCatalogue::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCategories {
    /// Source of `records`.
    pub origin: CategoryOrigin,
    /// Records ordered by ascending `sort_order`.
    pub records: Vec<CategoryRecord>,
}

impl LoadedCategories {
    fn builtin() -> Self {
        Self {
            origin: CategoryOrigin::BuiltIn,
            records: builtin_categories().to_vec(),
        }
    }
}

/// Loads the category list.
///
/// With no source configured the built-in list is returned without any
/// remote call. A configured source that fails or yields no rows also falls
/// back to the built-in list.
#[derive(Clone, Default)]
pub struct CategoryCatalogue {
    source: Option<Arc<dyn CategorySource>>,
}

impl CategoryCatalogue {
    /// Catalogue backed by `source`.
    pub fn remote(source: Arc<dyn CategorySource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Catalogue that only serves the built-in list.
    pub fn builtin_only() -> Self {
        Self { source: None }
    }

    /// Return `true` when a remote source is configured.
    pub fn has_remote_source(&self) -> bool {
        self.source.is_some()
    }

    /// Load records, falling back to the built-in list.
    pub async fn load(&self) -> LoadedCategories {
        let Some(source) = self.source.as_ref() else {
            return LoadedCategories::builtin();
        };

        match source.top_level_categories().await {
            Ok(records) if records.is_empty() => {
                warn!("category source returned no rows; serving built-in categories");
                LoadedCategories::builtin()
            }
            Ok(mut records) => {
                records.sort_by_key(CategoryRecord::sort_order);
                debug!(count = records.len(), "loaded remote categories");
                LoadedCategories {
                    origin: CategoryOrigin::Remote,
                    records,
                }
            }
            Err(error) => {
                warn!(%error, "category source failed; serving built-in categories");
                LoadedCategories::builtin()
            }
        }
    }
}

impl std::fmt::Debug for CategoryCatalogue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryCatalogue")
            .field("remote", &self.has_remote_source())
            .finish()
    }
}
