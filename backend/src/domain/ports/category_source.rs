//! Driven port for the remote category table.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::categories::CategoryRecord;

define_port_error! {
    /// Errors raised when reading remote category rows.
    pub enum CategorySourceError {
        /// The data service could not be reached or answered with an error status.
        Transport { message: String } =>
            "category source request failed: {message}",
        /// Rows could not be decoded into category records.
        Decode { message: String } =>
            "category source returned invalid rows: {message}",
    }
}

/// Port for reading top-level category rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategorySource: Send + Sync {
    /// Return top-level records (rows without a parent) ordered by
    /// `sort_order`.
    async fn top_level_categories(&self) -> Result<Vec<CategoryRecord>, CategorySourceError>;
}
