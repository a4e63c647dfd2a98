//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data`. Both members are built once at
//! startup and never mutated afterwards.

use std::sync::Arc;

use crate::domain::auth::AuthCapability;
use crate::domain::categories::CategoryCatalogue;
use crate::domain::ports::{AuthProvider, CategorySource};

/// Dependency bundle for HTTP handlers.
#[derive(Clone, Debug, Default)]
pub struct HttpState {
    /// Authentication provider handle; may be unconfigured.
    pub auth: AuthCapability,
    /// Category loader with built-in fallback.
    pub categories: CategoryCatalogue,
}

impl HttpState {
    /// Construct state from optional adapters.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use community_backend::domain::ports::FixtureAuthProvider;
    /// use community_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Some(Arc::new(FixtureAuthProvider)), None);
    /// assert!(state.auth.is_configured());
    /// assert!(!state.categories.has_remote_source());
    /// ```
    pub fn new(
        auth: Option<Arc<dyn AuthProvider>>,
        categories: Option<Arc<dyn CategorySource>>,
    ) -> Self {
        Self {
            auth: AuthCapability::from(auth),
            categories: categories.map_or_else(CategoryCatalogue::builtin_only, CategoryCatalogue::remote),
        }
    }
}
