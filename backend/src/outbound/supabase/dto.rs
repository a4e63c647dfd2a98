//! Wire payloads for the Supabase auth and REST endpoints.
//!
//! Responses decode into these DTOs first, then map into domain types in one
//! pass.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::categories::{
    CategoryRecord, CategoryRecordDraft, CategoryValidationError, ProcessCategory, Timeframe,
};
use crate::domain::ports::{AuthenticatedUser, SignUpRequest};

#[derive(Debug, Serialize)]
pub(super) struct SignUpBody<'a> {
    pub(super) email: &'a str,
    pub(super) password: &'a str,
    pub(super) data: SignUpDataBody<'a>,
}

#[derive(Debug, Serialize)]
pub(super) struct SignUpDataBody<'a> {
    pub(super) display_name: &'a str,
    pub(super) role: &'a str,
}

impl<'a> From<&'a SignUpRequest> for SignUpBody<'a> {
    fn from(request: &'a SignUpRequest) -> Self {
        Self {
            email: &request.email,
            password: request.password.as_str(),
            data: SignUpDataBody {
                display_name: &request.metadata.display_name,
                role: request.metadata.role.as_str(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct PasswordGrantBody<'a> {
    pub(super) email: &'a str,
    pub(super) password: &'a str,
}

/// Error body; GoTrue and PostgREST disagree on the key name.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ErrorBodyDto {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    error: Option<Value>,
}

impl ErrorBodyDto {
    /// First non-blank message among `msg`, `error_description`, `message`
    /// and `error`.
    pub(super) fn into_message(self) -> Option<String> {
        let error = self.error.and_then(|value| match value {
            Value::String(text) => Some(text),
            Value::Object(map) => map.get("message").and_then(Value::as_str).map(str::to_owned),
            _ => None,
        });
        [self.msg, self.error_description, self.message, error]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
    }
}

/// Parse an error body, returning `None` for non-JSON or message-less bodies.
pub(super) fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBodyDto>(body)
        .ok()
        .and_then(ErrorBodyDto::into_message)
}

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

/// Sign-up answers with a bare user unless auto-confirm is enabled, in which
/// case it nests the user beside the issued tokens, as sign-in always does.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum AuthResponseDto {
    Session { user: UserDto },
    User(UserDto),
}

impl AuthResponseDto {
    pub(super) fn into_user(self, requested_email: &str) -> AuthenticatedUser {
        let user = match self {
            Self::Session { user } | Self::User(user) => user,
        };
        AuthenticatedUser {
            id: user.id,
            email: user
                .email
                .filter(|email| !email.is_empty())
                .unwrap_or_else(|| requested_email.to_owned()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RowId {
    Text(String),
    Number(i64),
}

impl RowId {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// One row of the categories table.
#[derive(Debug, Deserialize)]
pub(super) struct CategoryRowDto {
    id: RowId,
    name: String,
    slug: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    category: String,
    timeframe: Timeframe,
    #[serde(default)]
    sort_order: i32,
}

impl TryFrom<CategoryRowDto> for CategoryRecord {
    type Error = CategoryValidationError;

    fn try_from(row: CategoryRowDto) -> Result<Self, Self::Error> {
        let category: ProcessCategory = row.category.parse()?;
        CategoryRecord::new(CategoryRecordDraft {
            id: row.id.into_string(),
            name: row.name,
            slug: row.slug,
            description: row.description.unwrap_or_default(),
            icon: row.icon.unwrap_or_default(),
            category,
            timeframe: row.timeframe,
            sort_order: row.sort_order,
        })
    }
}
