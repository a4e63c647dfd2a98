//! Correlation identifier for one request.
//!
//! The Trace middleware puts a [`TraceId`] into task-local storage for the
//! lifetime of a handler. Code running inside that handler, including the
//! outbound adapters, reads it back with [`TraceId::current`]. Spawned tasks
//! do not inherit it.

use std::future::Future;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

tokio::task_local! {
    static CURRENT: TraceId;
}

/// Header carrying the trace id on requests and responses.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// UUID identifying one request.
///
/// # Examples
/// ```
/// use community_backend::TraceId;
///
/// let id: TraceId = "3fa85f64-5717-4562-b3fc-2c963f66afa6".parse().expect("UUID");
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Id of the request being handled, if any.
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `self` as the current id.
    ///
    /// # Examples
    /// ```
    /// use community_backend::TraceId;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
    /// let id = TraceId::new();
    /// assert_eq!(id.scope(async { TraceId::current() }).await, Some(id));
    /// assert_eq!(TraceId::current(), None);
    /// # });
    /// ```
    pub async fn scope<F: Future>(self, fut: F) -> F::Output {
        CURRENT.scope(self, fut).await
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl std::str::FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}
