//! Driven port for the external authentication provider.
//!
//! The provider owns account storage, password hashing, verification email
//! and session issuance. This crate only consumes its sign-up and sign-in
//! calls; outbound adapters translate them to the provider's wire protocol.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::define_port_error;
use crate::domain::auth::Role;

define_port_error! {
    /// Errors raised by an authentication provider call.
    pub enum AuthProviderError {
        /// The provider answered with an error payload.
        Rejected { message: String } =>
            "provider rejected the request: {message}",
        /// The provider could not be reached or its answer could not be read.
        Transport { message: String } =>
            "provider request failed: {message}",
    }
}

/// Profile data stored alongside a new account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpMetadata {
    /// Name shown to the community.
    pub display_name: String,
    /// Selected community role.
    pub role: Role,
}

/// Account creation request.
#[derive(Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    /// Email address of the new account.
    pub email: String,
    /// Initial password.
    pub password: Zeroizing<String>,
    /// Profile metadata.
    pub metadata: SignUpMetadata,
}

impl std::fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("metadata", &self.metadata)
            .finish()
    }
}

/// Account returned by a successful provider call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Provider-assigned account identifier.
    pub id: String,
    /// Email address the provider holds for the account.
    pub email: String,
}

/// Port for account creation and password sign-in.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Create an account. The provider may require email verification before
    /// the account can sign in.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthenticatedUser, AuthProviderError>;

    /// Exchange an email/password pair for an authenticated account.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AuthProviderError>;
}

/// Email accepted by [`FixtureAuthProvider::sign_in`].
pub const FIXTURE_EMAIL: &str = "ada@example.com";
/// Password accepted by [`FixtureAuthProvider::sign_in`].
pub const FIXTURE_PASSWORD: &str = "analytical";
/// Email whose sign-in is refused as unverified by [`FixtureAuthProvider`].
pub const FIXTURE_UNVERIFIED_EMAIL: &str = "unverified@example.com";
/// Account id returned by [`FixtureAuthProvider`].
pub const FIXTURE_ACCOUNT_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

/// In-memory provider for tests and local development.
///
/// Sign-up accepts every request except [`FIXTURE_EMAIL`], which reports an
/// already registered account. Sign-in accepts [`FIXTURE_EMAIL`] with
/// [`FIXTURE_PASSWORD`], answers [`FIXTURE_UNVERIFIED_EMAIL`] with an
/// unconfirmed-email error and refuses everything else as invalid credentials.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAuthProvider;

#[async_trait]
impl AuthProvider for FixtureAuthProvider {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthenticatedUser, AuthProviderError> {
        if request.email == FIXTURE_EMAIL {
            return Err(AuthProviderError::rejected("User already registered"));
        }
        Ok(AuthenticatedUser {
            id: FIXTURE_ACCOUNT_ID.to_owned(),
            email: request.email.clone(),
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AuthProviderError> {
        match (email, password) {
            (FIXTURE_EMAIL, FIXTURE_PASSWORD) => Ok(AuthenticatedUser {
                id: FIXTURE_ACCOUNT_ID.to_owned(),
                email: email.to_owned(),
            }),
            (FIXTURE_UNVERIFIED_EMAIL, _) => Err(AuthProviderError::rejected("Email not confirmed")),
            _ => Err(AuthProviderError::rejected("Invalid login credentials")),
        }
    }
}
