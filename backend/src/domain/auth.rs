//! Signup and login forms.
//!
//! Form input is validated locally, handed to the configured
//! [`crate::domain::ports::AuthProvider`] and the outcome is folded into a
//! [`FormState`]. Login failures from the provider are rewritten into
//! actionable guidance by [`normalize_login_error`].

mod capability;
mod credentials;
mod normalizer;
mod submission;
mod validation;

pub use capability::AuthCapability;
pub use credentials::{FormField, FormKind, LoginForm, Role, SignupForm, UnknownRole};
pub use normalizer::{
    INCORRECT_CREDENTIALS_MESSAGE, LOGIN_ERROR_RULES, LOGIN_FALLBACK_MESSAGE, NormalizationRule,
    VERIFY_EMAIL_MESSAGE, first_matching_rule, normalize_login_error,
};
pub use submission::{
    COMMUNITY_PATH, Confirmation, CredentialForm, FormController, FormError, FormState,
    NOT_CONFIGURED_MESSAGE, Redirect, SIGNUP_CONFIRMATION_MESSAGE, SIGNUP_CONFIRMATION_TITLE,
    SIGNUP_FALLBACK_MESSAGE, SIGNUP_REDIRECT_DELAY, SubmissionSuccess, UNEXPECTED_MESSAGE,
};
pub use validation::{
    CredentialValidationError, MIN_PASSWORD_LEN, is_valid_email, validate_login, validate_signup,
};
