//! PostgREST-backed [`CategorySource`].

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use super::config::SupabaseProject;
use super::dto::{CategoryRowDto, error_message};
use crate::domain::categories::CategoryRecord;
use crate::domain::ports::{CategorySource, CategorySourceError};

/// Table read when no other is configured.
pub const DEFAULT_CATEGORIES_TABLE: &str = "business_processes";

/// Category adapter reading top-level rows from one table.
#[derive(Debug, Clone)]
pub struct SupabaseCategorySource {
    project: SupabaseProject,
    table: String,
}

impl SupabaseCategorySource {
    /// Read from `table` in `project`.
    pub fn new(project: SupabaseProject, table: impl Into<String>) -> Self {
        Self {
            project,
            table: table.into(),
        }
    }

    fn rows_url(&self) -> Result<Url, CategorySourceError> {
        let mut url = self
            .project
            .endpoint(&format!("rest/v1/{}", self.table))
            .map_err(|err| CategorySourceError::transport(format!("invalid table URL: {err}")))?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("parent_id", "is.null")
            .append_pair("order", "sort_order.asc");
        Ok(url)
    }
}

#[async_trait]
impl CategorySource for SupabaseCategorySource {
    async fn top_level_categories(&self) -> Result<Vec<CategoryRecord>, CategorySourceError> {
        let response = self
            .project
            .get(self.rows_url()?)
            .send()
            .await
            .map_err(|err| CategorySourceError::transport(err.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| CategorySourceError::transport(err.to_string()))?;
        if !status.is_success() {
            let detail = error_message(&body).unwrap_or_default();
            return Err(CategorySourceError::transport(format!(
                "status {}: {detail}",
                status.as_u16()
            )));
        }
        let records = parse_rows(&body)?;
        debug!(table = %self.table, count = records.len(), "loaded remote categories");
        Ok(records)
    }
}

/// Decode rows, skipping any that fail validation.
fn parse_rows(body: &[u8]) -> Result<Vec<CategoryRecord>, CategorySourceError> {
    let rows: Vec<Value> = serde_json::from_slice(body)
        .map_err(|err| CategorySourceError::decode(format!("expected a JSON array: {err}")))?;
    Ok(rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let decoded = serde_json::from_value::<CategoryRowDto>(row)
                .map_err(|err| err.to_string())
                .and_then(|dto| CategoryRecord::try_from(dto).map_err(|err| err.to_string()));
            match decoded {
                Ok(record) => Some(record),
                Err(reason) => {
                    warn!(index, %reason, "skipping invalid category row");
                    None
                }
            }
        })
        .collect())
}
