//! Local credential checks run before any provider call.
//!
//! Each validator returns the first failure it meets, in a fixed order, so
//! the form shows one actionable message at a time.

use std::sync::OnceLock;

use regex::Regex;

use super::credentials::{FormField, FormKind, LoginForm, SignupForm};

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LEN: usize = 6;

// One `@`, a dot somewhere after it, no whitespace anywhere.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn email_regex() -> Option<&'static Regex> {
    EMAIL_RE
        .get_or_init(|| {
            Regex::new(EMAIL_PATTERN)
                .inspect_err(|error| tracing::error!(%error, "email pattern failed to compile"))
                .ok()
        })
        .as_ref()
}

/// Return `true` when `value` looks like `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(value))
}

/// Reasons a credential form is rejected locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CredentialValidationError {
    /// A required field was empty.
    #[error("missing required field: {}", field.as_str())]
    MissingField {
        /// First empty field in form order.
        field: FormField,
    },
    /// Email does not match the accepted shape.
    #[error("email address is malformed")]
    InvalidEmail,
    /// Signup password is shorter than [`MIN_PASSWORD_LEN`].
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length.
        min: usize,
    },
    /// Password and confirmation differ.
    #[error("password confirmation does not match")]
    PasswordMismatch,
}

impl CredentialValidationError {
    /// Field the failure should be attached to.
    pub fn field(self) -> FormField {
        match self {
            Self::MissingField { field } => field,
            Self::InvalidEmail => FormField::Email,
            Self::PasswordTooShort { .. } => FormField::Password,
            Self::PasswordMismatch => FormField::ConfirmPassword,
        }
    }

    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::InvalidEmail => "invalid_email",
            Self::PasswordTooShort { .. } => "password_too_short",
            Self::PasswordMismatch => "password_mismatch",
        }
    }

    /// Banner text shown on the form.
    pub fn user_message(self, kind: FormKind) -> &'static str {
        match (self, kind) {
            (Self::MissingField { .. }, FormKind::Signup) => "Please fill in all required fields",
            (Self::MissingField { .. }, FormKind::Login) => "Please enter your email and password",
            (Self::InvalidEmail, _) => "Please enter a valid email address",
            (Self::PasswordTooShort { .. }, _) => "Password must be at least 6 characters",
            (Self::PasswordMismatch, _) => "Passwords do not match",
        }
    }
}

fn first_missing<'a>(
    fields: impl IntoIterator<Item = (FormField, &'a str)>,
) -> Result<(), CredentialValidationError> {
    match fields.into_iter().find(|(_, value)| value.is_empty()) {
        Some((field, _)) => Err(CredentialValidationError::MissingField { field }),
        None => Ok(()),
    }
}

fn ensure_email(email: &str) -> Result<(), CredentialValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(CredentialValidationError::InvalidEmail)
    }
}

/// Validate signup input.
///
/// Order: required fields, password length, confirmation, email shape.
///
/// # Examples
/// ```
/// use community_backend::domain::auth::{validate_signup, CredentialValidationError, SignupForm};
/// use zeroize::Zeroizing;
///
/// let form = SignupForm {
///     email: "ada@example.com".to_owned(),
///     password: Zeroizing::new("abc".to_owned()),
///     confirm_password: Some(Zeroizing::new("abc".to_owned())),
///     display_name: Some("Ada".to_owned()),
///     ..SignupForm::default()
/// };
/// assert_eq!(
///     validate_signup(&form),
///     Err(CredentialValidationError::PasswordTooShort { min: 6 })
/// );
/// ```
pub fn validate_signup(form: &SignupForm) -> Result<(), CredentialValidationError> {
    first_missing([
        (FormField::Email, form.email.as_str()),
        (FormField::Password, form.password.as_str()),
        (FormField::DisplayName, form.display_name()),
    ])?;

    // Length is measured in UTF-16 code units, as browsers count it.
    if form.password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(CredentialValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }

    if form.password.as_str() != form.confirm_password() {
        return Err(CredentialValidationError::PasswordMismatch);
    }

    ensure_email(&form.email)
}

/// Validate login input.
///
/// No length rule applies: any stored password must be accepted.
pub fn validate_login(form: &LoginForm) -> Result<(), CredentialValidationError> {
    first_missing([
        (FormField::Email, form.email.as_str()),
        (FormField::Password, form.password.as_str()),
    ])?;
    ensure_email(&form.email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use zeroize::Zeroizing;

    #[fixture]
    fn signup() -> SignupForm {
        SignupForm {
            email: "ada@example.com".to_owned(),
            password: Zeroizing::new("analytical".to_owned()),
            confirm_password: Some(Zeroizing::new("analytical".to_owned())),
            display_name: Some("Ada Lovelace".to_owned()),
            ..SignupForm::default()
        }
    }

    fn login(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        }
    }

    #[rstest]
    #[case("ada@example.com")]
    #[case("a.b+tag@sub.example.org")]
    #[case("x@y.z")]
    #[case("ada@exa.mple.com")]
    fn accepts_well_formed_emails(#[case] email: &str) {
        assert!(is_valid_email(email));
    }

    #[rstest]
    #[case("")]
    #[case("ada")]
    #[case("ada@example")]
    #[case("ada@@example.com")]
    #[case("ada@.com")]
    #[case("ada@example.")]
    #[case("@example.com")]
    #[case("ada lovelace@example.com")]
    #[case("ada@exa mple.com")]
    #[case(" ada@example.com")]
    fn rejects_malformed_emails(#[case] email: &str) {
        assert!(!is_valid_email(email));
    }

    #[rstest]
    fn signup_accepts_complete_input(signup: SignupForm) {
        assert_eq!(validate_signup(&signup), Ok(()));
    }

    #[rstest]
    #[case(FormField::Email)]
    #[case(FormField::Password)]
    #[case(FormField::DisplayName)]
    fn signup_reports_first_missing_field(mut signup: SignupForm, #[case] field: FormField) {
        match field {
            FormField::Email => signup.email.clear(),
            FormField::Password => signup.password = Zeroizing::new(String::new()),
            FormField::DisplayName => signup.display_name = None,
            FormField::ConfirmPassword => unreachable!("not a required field"),
        }
        assert_eq!(
            validate_signup(&signup),
            Err(CredentialValidationError::MissingField { field })
        );
    }

    #[rstest]
    fn missing_field_wins_over_other_failures() {
        let form = SignupForm {
            email: "not-an-email".to_owned(),
            password: Zeroizing::new("abc".to_owned()),
            ..SignupForm::default()
        };
        assert_eq!(
            validate_signup(&form),
            Err(CredentialValidationError::MissingField {
                field: FormField::DisplayName
            })
        );
    }

    #[rstest]
    #[case("a")]
    #[case("12345")]
    fn signup_rejects_short_passwords(mut signup: SignupForm, #[case] password: &str) {
        signup.password = Zeroizing::new(password.to_owned());
        signup.confirm_password = Some(Zeroizing::new("something-else".to_owned()));
        assert_eq!(
            validate_signup(&signup),
            Err(CredentialValidationError::PasswordTooShort { min: 6 })
        );
    }

    #[rstest]
    fn six_character_password_is_long_enough(mut signup: SignupForm) {
        signup.password = Zeroizing::new("123456".to_owned());
        signup.confirm_password = Some(Zeroizing::new("123456".to_owned()));
        assert_eq!(validate_signup(&signup), Ok(()));
    }

    #[rstest]
    #[case("😀😀😀", Ok(()))]
    #[case("é€ab", Err(CredentialValidationError::PasswordTooShort { min: 6 }))]
    fn password_length_counts_utf16_units(
        mut signup: SignupForm,
        #[case] password: &str,
        #[case] expected: Result<(), CredentialValidationError>,
    ) {
        signup.password = Zeroizing::new(password.to_owned());
        signup.confirm_password = Some(Zeroizing::new(password.to_owned()));
        assert_eq!(validate_signup(&signup), expected);
    }

    #[rstest]
    fn signup_rejects_mismatched_confirmation(mut signup: SignupForm) {
        signup.email = "broken".to_owned();
        signup.confirm_password = Some(Zeroizing::new("analyticaL".to_owned()));
        assert_eq!(
            validate_signup(&signup),
            Err(CredentialValidationError::PasswordMismatch)
        );
    }

    #[rstest]
    fn absent_confirmation_is_a_mismatch(mut signup: SignupForm) {
        signup.confirm_password = None;
        assert_eq!(
            validate_signup(&signup),
            Err(CredentialValidationError::PasswordMismatch)
        );
    }

    #[rstest]
    fn signup_checks_email_last(mut signup: SignupForm) {
        signup.email = "ada@example".to_owned();
        assert_eq!(
            validate_signup(&signup),
            Err(CredentialValidationError::InvalidEmail)
        );
    }

    #[rstest]
    #[case("", "pw", FormField::Email)]
    #[case("ada@example.com", "", FormField::Password)]
    #[case("", "", FormField::Email)]
    fn login_reports_missing_fields(
        #[case] email: &str,
        #[case] password: &str,
        #[case] field: FormField,
    ) {
        assert_eq!(
            validate_login(&login(email, password)),
            Err(CredentialValidationError::MissingField { field })
        );
    }

    #[rstest]
    fn login_accepts_short_passwords() {
        assert_eq!(validate_login(&login("ada@example.com", "pw")), Ok(()));
    }

    #[rstest]
    fn login_rejects_malformed_email() {
        assert_eq!(
            validate_login(&login("ada.example.com", "password")),
            Err(CredentialValidationError::InvalidEmail)
        );
    }

    #[rstest]
    fn missing_field_message_depends_on_form() {
        let err = CredentialValidationError::MissingField {
            field: FormField::Email,
        };
        assert_eq!(
            err.user_message(FormKind::Signup),
            "Please fill in all required fields"
        );
        assert_eq!(
            err.user_message(FormKind::Login),
            "Please enter your email and password"
        );
    }
}
