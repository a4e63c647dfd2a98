//! Read-only handle telling handlers whether authentication is available.

use std::fmt;
use std::sync::Arc;

use crate::domain::ports::AuthProvider;

/// Authentication provider handle built once at startup.
///
/// An unconfigured capability makes every form submission fail with
/// [`super::FormError::NotConfigured`] without contacting anything.
#[derive(Clone, Default)]
pub struct AuthCapability {
    provider: Option<Arc<dyn AuthProvider>>,
}

impl AuthCapability {
    /// Capability backed by `provider`.
    pub fn configured(provider: Arc<dyn AuthProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Capability with no provider.
    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// The provider, when configured.
    pub fn provider(&self) -> Option<&Arc<dyn AuthProvider>> {
        self.provider.as_ref()
    }
}

impl fmt::Debug for AuthCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthCapability")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl From<Option<Arc<dyn AuthProvider>>> for AuthCapability {
    fn from(provider: Option<Arc<dyn AuthProvider>>) -> Self {
        Self { provider }
    }
}
