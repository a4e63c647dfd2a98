//! Per-form submission controller.
//!
//! A controller owns one form and walks `Idle → Submitting → Success | Failed`.
//! Editing the form returns it to `Idle`. Local checks always run before the
//! provider is contacted, and nothing is sent while the provider is
//! unconfigured.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::capability::AuthCapability;
use super::credentials::{FormKind, LoginForm, SignupForm};
use super::normalizer::normalize_login_error;
use super::validation::{CredentialValidationError, validate_login, validate_signup};
use crate::domain::ports::{
    AuthProvider, AuthProviderError, AuthenticatedUser, SignUpMetadata, SignUpRequest,
};

/// Client route opened after a successful submission.
pub const COMMUNITY_PATH: &str = "/community";
/// Pause before leaving the signup confirmation.
pub const SIGNUP_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Shown when no authentication provider is configured.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Authentication service is not configured. Please try again later.";
/// Shown when the provider call fails in transit.
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please try again.";
/// Shown when the provider refuses a signup without saying why.
pub const SIGNUP_FALLBACK_MESSAGE: &str = "Unable to sign up. Please try again.";

/// Title of the banner shown after a successful signup.
pub const SIGNUP_CONFIRMATION_TITLE: &str = "Welcome to the Community!";
/// Body of the banner shown after a successful signup.
pub const SIGNUP_CONFIRMATION_MESSAGE: &str = "Check your email to verify your account.";

/// Why a submission landed in [`FormState::Failed`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Local validation failed; the provider was not called.
    #[error("{message}")]
    Invalid {
        /// Failed check.
        reason: CredentialValidationError,
        /// Banner text for the form that failed.
        message: &'static str,
    },
    /// No provider is configured.
    #[error("{}", NOT_CONFIGURED_MESSAGE)]
    NotConfigured,
    /// The provider refused the request.
    #[error("{message}")]
    ProviderRejected {
        /// Provider text, normalised for login.
        message: String,
    },
    /// The provider call failed in transit or returned something unreadable.
    #[error("{}", UNEXPECTED_MESSAGE)]
    Unexpected,
}

impl FormError {
    /// Wrap a validation failure with the text for `kind`.
    pub fn invalid(kind: FormKind, reason: CredentialValidationError) -> Self {
        Self::Invalid {
            reason,
            message: reason.user_message(kind),
        }
    }
}

/// Banner shown after a successful signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    /// Banner heading.
    pub title: &'static str,
    /// Banner body.
    pub message: &'static str,
}

/// Navigation the client performs after success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    /// Target client route.
    pub path: &'static str,
    /// Delay before navigating.
    pub after: Duration,
}

/// Payload of [`FormState::Success`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionSuccess {
    /// Account returned by the provider.
    pub user: AuthenticatedUser,
    /// Confirmation banner, when the form shows one.
    pub confirmation: Option<Confirmation>,
    /// Where to go next.
    pub redirect: Redirect,
}

/// Controller state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    /// Waiting for input; also the state after any edit.
    #[default]
    Idle,
    /// A provider request is in flight.
    Submitting,
    /// The provider accepted the form.
    Success(SubmissionSuccess),
    /// Local validation or the provider refused the form.
    Failed(FormError),
}

/// Behaviour shared by the signup and login forms.
#[async_trait]
pub trait CredentialForm: Send + Sync {
    /// Which form this is.
    const KIND: FormKind;

    /// Run the local checks.
    fn validate(&self) -> Result<(), CredentialValidationError>;

    /// Send the form to the provider.
    async fn dispatch(
        &self,
        provider: &dyn AuthProvider,
    ) -> Result<AuthenticatedUser, AuthProviderError>;

    /// Build the success payload for `user`.
    fn success(user: AuthenticatedUser) -> SubmissionSuccess;

    /// Text shown for a provider rejection.
    fn rejection_message(raw: &str) -> String;
}

#[async_trait]
impl CredentialForm for SignupForm {
    const KIND: FormKind = FormKind::Signup;

    fn validate(&self) -> Result<(), CredentialValidationError> {
        validate_signup(self)
    }

    async fn dispatch(
        &self,
        provider: &dyn AuthProvider,
    ) -> Result<AuthenticatedUser, AuthProviderError> {
        let request = SignUpRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            metadata: SignUpMetadata {
                display_name: self.display_name().to_owned(),
                role: self.role,
            },
        };
        provider.sign_up(&request).await
    }

    fn success(user: AuthenticatedUser) -> SubmissionSuccess {
        SubmissionSuccess {
            user,
            confirmation: Some(Confirmation {
                title: SIGNUP_CONFIRMATION_TITLE,
                message: SIGNUP_CONFIRMATION_MESSAGE,
            }),
            redirect: Redirect {
                path: COMMUNITY_PATH,
                after: SIGNUP_REDIRECT_DELAY,
            },
        }
    }

    fn rejection_message(raw: &str) -> String {
        if raw.is_empty() {
            SIGNUP_FALLBACK_MESSAGE.to_owned()
        } else {
            raw.to_owned()
        }
    }
}

#[async_trait]
impl CredentialForm for LoginForm {
    const KIND: FormKind = FormKind::Login;

    fn validate(&self) -> Result<(), CredentialValidationError> {
        validate_login(self)
    }

    async fn dispatch(
        &self,
        provider: &dyn AuthProvider,
    ) -> Result<AuthenticatedUser, AuthProviderError> {
        provider.sign_in(&self.email, &self.password).await
    }

    fn success(user: AuthenticatedUser) -> SubmissionSuccess {
        SubmissionSuccess {
            user,
            confirmation: None,
            redirect: Redirect {
                path: COMMUNITY_PATH,
                after: Duration::ZERO,
            },
        }
    }

    fn rejection_message(raw: &str) -> String {
        normalize_login_error(raw)
    }
}

/// Drives one form through its submission lifecycle.
#[derive(Debug, Default)]
pub struct FormController<F> {
    form: F,
    state: FormState,
}

impl<F: CredentialForm> FormController<F> {
    /// Controller in the `Idle` state holding `form`.
    pub fn new(form: F) -> Self {
        Self {
            form,
            state: FormState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Change the form and return to `Idle`.
    pub fn edit(&mut self, change: impl FnOnce(&mut F)) {
        change(&mut self.form);
        self.state = FormState::Idle;
    }

    /// Consume the controller, returning its final state.
    pub fn into_state(self) -> FormState {
        self.state
    }

    /// Submit the form.
    ///
    /// A controller already in `Submitting` is left untouched.
    pub async fn submit(&mut self, auth: &AuthCapability) -> &FormState {
        if matches!(self.state, FormState::Submitting) {
            debug!(form = ?F::KIND, "submit ignored while a request is in flight");
            return &self.state;
        }
        self.state = FormState::Idle;

        let Some(provider) = auth.provider() else {
            warn!(form = ?F::KIND, "authentication provider not configured");
            self.state = FormState::Failed(FormError::NotConfigured);
            return &self.state;
        };

        if let Err(reason) = self.form.validate() {
            debug!(form = ?F::KIND, code = reason.code(), "form failed local validation");
            self.state = FormState::Failed(FormError::invalid(F::KIND, reason));
            return &self.state;
        }

        self.state = FormState::Submitting;
        let outcome = self.form.dispatch(provider.as_ref()).await;
        self.state = match outcome {
            Ok(user) => {
                info!(form = ?F::KIND, "credential form accepted");
                FormState::Success(F::success(user))
            }
            Err(AuthProviderError::Rejected { message }) => {
                debug!(form = ?F::KIND, provider_message = %message, "provider rejected form");
                FormState::Failed(FormError::ProviderRejected {
                    message: F::rejection_message(&message),
                })
            }
            Err(error @ AuthProviderError::Transport { .. }) => {
                warn!(form = ?F::KIND, %error, "provider call failed");
                FormState::Failed(FormError::Unexpected)
            }
        };
        &self.state
    }
}
