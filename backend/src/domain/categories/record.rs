//! Business-process category record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CategoryValidationError;

/// Category tag used to group records and drive the filter chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessCategory {
    /// Immediate response work.
    Emergency,
    /// Day-to-day service delivery.
    Operational,
    /// Planning and coordination.
    Strategic,
    /// Policy and structural change.
    Systemic,
}

impl ProcessCategory {
    /// Every tag in chip order.
    pub const ALL: [Self; 4] = [
        Self::Emergency,
        Self::Operational,
        Self::Strategic,
        Self::Systemic,
    ];

    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Operational => "operational",
            Self::Strategic => "strategic",
            Self::Systemic => "systemic",
        }
    }

    /// Chip label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Emergency => "Emergency",
            Self::Operational => "Operational",
            Self::Strategic => "Strategic",
            Self::Systemic => "Systemic",
        }
    }

    /// Design-token colour used for the card accent.
    pub fn color_token(self) -> &'static str {
        match self {
            Self::Emergency => "error-600",
            Self::Operational => "primary-600",
            Self::Strategic => "secondary-600",
            Self::Systemic => "accent-600",
        }
    }
}

impl fmt::Display for ProcessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessCategory {
    type Err = CategoryValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| CategoryValidationError::UnknownCategory {
                value: s.to_owned(),
            })
    }
}

/// How often the process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timeframe {
    /// Continuous, minute-by-minute.
    RealTime,
    /// Daily cycle.
    Daily,
    /// Weekly cycle.
    Weekly,
    /// Monthly cycle.
    Monthly,
    /// Yearly cycle.
    Annual,
    /// Spans several years.
    MultiYear,
}

impl Timeframe {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RealTime => "real-time",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Annual => "annual",
            Self::MultiYear => "multi-year",
        }
    }

    /// Badge label shown on the card footer.
    pub fn label(self) -> &'static str {
        match self {
            Self::RealTime => "⚡ Real-time",
            Self::Daily => "📅 Daily",
            Self::Weekly => "📆 Weekly",
            Self::Monthly => "🗓️ Monthly",
            Self::Annual => "📊 Annual",
            Self::MultiYear => "🏛️ Multi-year",
        }
    }
}

/// Input payload for [`CategoryRecord::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecordDraft {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    pub category: ProcessCategory,
    pub timeframe: Timeframe,
    pub sort_order: i32,
}

/// One discussion category shown in the community browser.
///
/// ## Invariants
/// - `id` and `name` are non-empty once trimmed.
/// - `slug` is a lowercase ASCII slug, so `/community/<slug>` is a valid path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    id: String,
    name: String,
    slug: String,
    description: String,
    icon: String,
    category: ProcessCategory,
    timeframe: Timeframe,
    sort_order: i32,
}

impl CategoryRecord {
    /// Validate and construct a record.
    pub fn new(draft: CategoryRecordDraft) -> Result<Self, CategoryValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn slug(&self) -> &str {
        self.slug.as_str()
    }
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
    pub fn icon(&self) -> &str {
        self.icon.as_str()
    }
    pub fn category(&self) -> ProcessCategory {
        self.category
    }
    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }
    pub fn sort_order(&self) -> i32 {
        self.sort_order
    }

    /// Client route of the discussion board for this record.
    pub fn board_path(&self) -> String {
        format!("/community/{}", self.slug)
    }
}

/// Hyphen-separated runs of lowercase ASCII letters and digits.
fn is_board_slug(slug: &str) -> bool {
    slug.split('-').all(|segment| {
        !segment.is_empty()
            && segment
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    })
}

impl TryFrom<CategoryRecordDraft> for CategoryRecord {
    type Error = CategoryValidationError;

    fn try_from(draft: CategoryRecordDraft) -> Result<Self, Self::Error> {
        if draft.id.trim().is_empty() {
            return Err(CategoryValidationError::EmptyField { field: "id" });
        }
        if draft.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyField { field: "name" });
        }
        if !is_board_slug(&draft.slug) {
            return Err(CategoryValidationError::InvalidSlug { slug: draft.slug });
        }

        Ok(Self {
            id: draft.id,
            name: draft.name,
            slug: draft.slug,
            description: draft.description,
            icon: draft.icon,
            category: draft.category,
            timeframe: draft.timeframe,
            sort_order: draft.sort_order,
        })
    }
}

impl<'de> Deserialize<'de> for CategoryRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        CategoryRecordDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
