//! Raw credential form input for signup and login.
//!
//! These values are transient: an inbound adapter builds one per request,
//! hands it to a [`super::FormController`], and drops it once the submission
//! settles. Passwords sit in zeroizing buffers and never appear in `Debug`
//! output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Community role selected on the signup form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Contributor or developer.
    #[default]
    Contributor,
    /// Student participant.
    Student,
    /// Teacher or educator.
    Teacher,
    /// Volunteer.
    Volunteer,
    /// NGO or partner organisation.
    Ngo,
    /// Anything else.
    Other,
}

impl Role {
    /// Every role in the order the signup form offers them.
    pub const ALL: [Self; 6] = [
        Self::Contributor,
        Self::Student,
        Self::Teacher,
        Self::Volunteer,
        Self::Ngo,
        Self::Other,
    ];

    /// Wire value stored in account metadata.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contributor => "contributor",
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Volunteer => "volunteer",
            Self::Ngo => "ngo",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {value}")]
pub struct UnknownRole {
    /// Rejected input.
    pub value: String,
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole { value: s.to_owned() })
    }
}

/// Which form a piece of input belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// Account creation.
    Signup,
    /// Sign in with an existing account.
    Login,
}

/// Fields a credential form can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Email address.
    Email,
    /// Password.
    Password,
    /// Password confirmation (signup only).
    ConfirmPassword,
    /// Display name (signup only).
    DisplayName,
}

impl FormField {
    /// Field name as used in request payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::DisplayName => "displayName",
        }
    }
}

/// Signup form input.
#[derive(Clone, Default)]
pub struct SignupForm {
    /// Email address as typed.
    pub email: String,
    /// Chosen password.
    pub password: Zeroizing<String>,
    /// Password confirmation; absent compares as empty.
    pub confirm_password: Option<Zeroizing<String>>,
    /// Name shown to the community.
    pub display_name: Option<String>,
    /// Selected community role.
    pub role: Role,
}

impl SignupForm {
    /// Confirmation value, treating an absent confirmation as empty.
    pub fn confirm_password(&self) -> &str {
        self.confirm_password.as_deref().map_or("", String::as_str)
    }

    /// Display name, treating an absent name as empty.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or_default()
    }
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .field("display_name", &self.display_name)
            .field("role", &self.role)
            .finish()
    }
}

/// Login form input.
#[derive(Clone, Default)]
pub struct LoginForm {
    /// Email address as typed.
    pub email: String,
    /// Password as typed.
    pub password: Zeroizing<String>,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
