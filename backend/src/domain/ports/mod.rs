//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven adapters implement these traits; each reports failures through a
//! typed error declared with `define_port_error!`.

mod macros;
pub(crate) use macros::define_port_error;

mod auth_provider;
mod category_source;

#[cfg(test)]
pub use auth_provider::MockAuthProvider;
pub use auth_provider::{
    AuthProvider, AuthProviderError, AuthenticatedUser, FIXTURE_ACCOUNT_ID, FIXTURE_EMAIL,
    FIXTURE_PASSWORD, FIXTURE_UNVERIFIED_EMAIL, FixtureAuthProvider, SignUpMetadata,
    SignUpRequest,
};
#[cfg(test)]
pub use category_source::MockCategorySource;
pub use category_source::{CategorySource, CategorySourceError};
