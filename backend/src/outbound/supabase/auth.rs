//! GoTrue-backed [`AuthProvider`].

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Serialize;
use tracing::debug;

use super::config::SupabaseProject;
use super::dto::{AuthResponseDto, PasswordGrantBody, SignUpBody, error_message};
use crate::domain::ports::{AuthProvider, AuthProviderError, AuthenticatedUser, SignUpRequest};

const SIGNUP_PATH: &str = "auth/v1/signup";
const TOKEN_PATH: &str = "auth/v1/token";

/// Authentication adapter for a Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseAuthProvider {
    project: SupabaseProject,
}

impl SupabaseAuthProvider {
    /// Wrap a configured project.
    pub fn new(project: SupabaseProject) -> Self {
        Self { project }
    }

    fn signup_url(&self) -> Result<Url, AuthProviderError> {
        self.project
            .endpoint(SIGNUP_PATH)
            .map_err(|err| AuthProviderError::transport(format!("invalid signup URL: {err}")))
    }

    fn token_url(&self) -> Result<Url, AuthProviderError> {
        let mut url = self
            .project
            .endpoint(TOKEN_PATH)
            .map_err(|err| AuthProviderError::transport(format!("invalid token URL: {err}")))?;
        url.query_pairs_mut().append_pair("grant_type", "password");
        Ok(url)
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        url: Url,
        body: &B,
        email: &str,
    ) -> Result<AuthenticatedUser, AuthProviderError> {
        let response = self
            .project
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, &bytes));
        }
        let decoded: AuthResponseDto = serde_json::from_slice(&bytes).map_err(|err| {
            AuthProviderError::transport(format!("invalid auth response payload: {err}"))
        })?;
        Ok(decoded.into_user(email))
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuthProvider {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthenticatedUser, AuthProviderError> {
        let url = self.signup_url()?;
        debug!(email = %request.email, role = request.metadata.role.as_str(), "supabase sign-up");
        self.post(url, &SignUpBody::from(request), &request.email)
            .await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AuthProviderError> {
        let url = self.token_url()?;
        debug!(email, "supabase password sign-in");
        self.post(url, &PasswordGrantBody { email, password }, email)
            .await
    }
}

fn map_transport_error(error: reqwest::Error) -> AuthProviderError {
    AuthProviderError::transport(error.to_string())
}

/// Client errors carry a user-facing payload; everything else is an outage.
fn map_status_error(status: StatusCode, body: &[u8]) -> AuthProviderError {
    let message = error_message(body);
    if status.is_client_error() {
        AuthProviderError::rejected(message.unwrap_or_default())
    } else {
        AuthProviderError::transport(match message {
            Some(message) => format!("status {}: {message}", status.as_u16()),
            None => format!("status {}", status.as_u16()),
        })
    }
}
