//! Category selector, free-text search and facet counts.

use std::fmt;
use std::str::FromStr;

use super::CategoryValidationError;
use super::record::{CategoryRecord, ProcessCategory};

/// Wire value of the catch-all selector.
pub const ALL_TAG: &str = "all";

/// Which category chip is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategorySelector {
    /// No category restriction.
    #[default]
    All,
    /// Only records tagged with this category.
    Only(ProcessCategory),
}

impl CategorySelector {
    /// Wire value (`all` or a category tag).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => ALL_TAG,
            Self::Only(category) => category.as_str(),
        }
    }

    /// Chip label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    fn admits(self, record: &CategoryRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => record.category() == category,
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategorySelector {
    type Err = CategoryValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_TAG {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// Filter inputs besides the record list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryQuery {
    /// Active category chip.
    pub selector: CategorySelector,
    /// Free-text search; empty means no text restriction.
    pub search: String,
}

impl CategoryQuery {
    /// Build a query from its parts.
    pub fn new(selector: CategorySelector, search: impl Into<String>) -> Self {
        Self {
            selector,
            search: search.into(),
        }
    }

    /// Return `true` when `record` passes both the selector and the search.
    ///
    /// The search is a case-insensitive substring match over the record name
    /// and description.
    pub fn matches(&self, record: &CategoryRecord) -> bool {
        self.selector.admits(record) && SearchNeedle::new(&self.search).admits(record)
    }

    /// Records that pass the query, in input order.
    ///
    /// # Examples
    /// ```
    /// use community_backend::domain::categories::{
    ///     builtin_categories, CategoryQuery, CategorySelector, ProcessCategory,
    /// };
    ///
    /// let query = CategoryQuery::new(CategorySelector::Only(ProcessCategory::Emergency), "shelter");
    /// let visible = query.apply(builtin_categories());
    /// assert_eq!(visible.len(), 1);
    /// assert_eq!(visible[0].name(), "Emergency Shelter Operations");
    /// ```
    pub fn apply<'a>(&self, records: &'a [CategoryRecord]) -> Vec<&'a CategoryRecord> {
        let needle = SearchNeedle::new(&self.search);
        records
            .iter()
            .filter(|record| self.selector.admits(record) && needle.admits(record))
            .collect()
    }
}

struct SearchNeedle(Option<String>);

impl SearchNeedle {
    fn new(search: &str) -> Self {
        if search.is_empty() {
            Self(None)
        } else {
            Self(Some(search.to_lowercase()))
        }
    }

    fn admits(&self, record: &CategoryRecord) -> bool {
        match &self.0 {
            None => true,
            Some(needle) => {
                record.name().to_lowercase().contains(needle)
                    || record.description().to_lowercase().contains(needle)
            }
        }
    }
}

/// One filter chip with its total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facet {
    /// Selector the chip activates.
    pub selector: CategorySelector,
    /// Records in the full list the chip would show with an empty search.
    pub count: usize,
}

/// Chip totals over the full, unsearched list: `all` first, then each tag.
pub fn facet_counts(records: &[CategoryRecord]) -> Vec<Facet> {
    let mut facets = Vec::with_capacity(ProcessCategory::ALL.len() + 1);
    facets.push(Facet {
        selector: CategorySelector::All,
        count: records.len(),
    });
    facets.extend(ProcessCategory::ALL.into_iter().map(|category| Facet {
        selector: CategorySelector::Only(category),
        count: records
            .iter()
            .filter(|record| record.category() == category)
            .count(),
    }));
    facets
}
