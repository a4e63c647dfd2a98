//! Translate provider login errors into guidance the user can act on.
//!
//! Rules are evaluated top to bottom against the lowercased provider message;
//! the first match supplies the text. Messages that match no rule pass
//! through unchanged.

/// Shown when the account exists but the email address is unverified.
pub const VERIFY_EMAIL_MESSAGE: &str = "You need to verify your email before you can log in. \
Check your inbox (and spam folder) for a verification email, then try again.";

/// Shown when the provider rejects the email/password pair.
pub const INCORRECT_CREDENTIALS_MESSAGE: &str = "Incorrect email or password. Please try again.";

/// Shown when the provider returns an empty login error.
pub const LOGIN_FALLBACK_MESSAGE: &str = "Unable to log in. Please try again.";

/// One entry of a normalisation table.
#[derive(Debug, Clone, Copy)]
pub struct NormalizationRule {
    /// Stable rule name used in logs.
    pub name: &'static str,
    /// Predicate over the lowercased provider message.
    pub matches: fn(&str) -> bool,
    /// Replacement text.
    pub message: &'static str,
}

fn mentions_verification(message: &str) -> bool {
    message.contains("confirm") || message.contains("verified")
}

fn is_invalid_credentials(message: &str) -> bool {
    message.contains("invalid login credentials")
}

/// Ordered rules applied to login failures.
pub const LOGIN_ERROR_RULES: &[NormalizationRule] = &[
    NormalizationRule {
        name: "email_unverified",
        matches: mentions_verification,
        message: VERIFY_EMAIL_MESSAGE,
    },
    NormalizationRule {
        name: "invalid_credentials",
        matches: is_invalid_credentials,
        message: INCORRECT_CREDENTIALS_MESSAGE,
    },
];

/// Return the first rule in `rules` matching `raw`, compared case-insensitively.
pub fn first_matching_rule<'r>(
    rules: &'r [NormalizationRule],
    raw: &str,
) -> Option<&'r NormalizationRule> {
    let lowered = raw.to_lowercase();
    rules.iter().find(|rule| (rule.matches)(&lowered))
}

/// Map a provider login error to the banner text.
///
/// # Examples
/// ```
/// use community_backend::domain::auth::{normalize_login_error, INCORRECT_CREDENTIALS_MESSAGE};
///
/// assert_eq!(
///     normalize_login_error("Invalid login credentials"),
///     INCORRECT_CREDENTIALS_MESSAGE
/// );
/// assert_eq!(normalize_login_error("Network timeout"), "Network timeout");
/// ```
pub fn normalize_login_error(raw: &str) -> String {
    if let Some(rule) = first_matching_rule(LOGIN_ERROR_RULES, raw) {
        tracing::debug!(rule = rule.name, "normalised provider login error");
        return rule.message.to_owned();
    }
    if raw.is_empty() {
        LOGIN_FALLBACK_MESSAGE.to_owned()
    } else {
        raw.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Email not confirmed")]
    #[case("EMAIL NOT CONFIRMED")]
    #[case("Please confirm your address")]
    #[case("Email address has not been verified")]
    fn verification_errors_get_instructions(#[case] raw: &str) {
        assert_eq!(normalize_login_error(raw), VERIFY_EMAIL_MESSAGE);
    }

    #[rstest]
    #[case("Invalid login credentials")]
    #[case("invalid LOGIN credentials supplied")]
    fn credential_errors_are_generic(#[case] raw: &str) {
        assert_eq!(normalize_login_error(raw), INCORRECT_CREDENTIALS_MESSAGE);
    }

    #[rstest]
    fn verification_rule_wins_when_both_match() {
        let raw = "Invalid login credentials or email not confirmed";
        assert_eq!(normalize_login_error(raw), VERIFY_EMAIL_MESSAGE);
    }

    #[rstest]
    #[case("Network timeout")]
    #[case("Too many requests")]
    fn unknown_errors_pass_through(#[case] raw: &str) {
        assert_eq!(normalize_login_error(raw), raw);
    }

    #[rstest]
    fn empty_errors_use_fallback() {
        assert_eq!(normalize_login_error(""), LOGIN_FALLBACK_MESSAGE);
    }

    #[rstest]
    #[case("   ")]
    #[case("\t")]
    fn whitespace_errors_pass_through(#[case] raw: &str) {
        assert_eq!(normalize_login_error(raw), raw);
    }

    #[rstest]
    fn rule_lookup_reports_rule_name() {
        let rule = first_matching_rule(LOGIN_ERROR_RULES, "Email not confirmed")
            .expect("verification rule matches");
        assert_eq!(rule.name, "email_unverified");
        assert!(first_matching_rule(LOGIN_ERROR_RULES, "rate limited").is_none());
    }
}
