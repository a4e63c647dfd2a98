//! Error payload returned to clients.
//!
//! [`Error`] knows nothing about HTTP; the inbound adapter picks the status
//! and headers. Every error records the [`TraceId`] in scope when it was
//! built so a form banner can be matched to server logs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TraceId;

/// Failure category shared by all endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Input failed validation or the provider refused a signup.
    InvalidRequest,
    /// Credentials were refused or no session exists.
    Unauthorized,
    /// Authentication is not configured on this deployment.
    ServiceUnavailable,
    /// The provider failed or could not be reached.
    UpstreamFailure,
    /// A bug or unexpected state inside this service.
    InternalError,
}

impl ErrorCode {
    /// Wire name of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::Unauthorized => "unauthorized",
            Self::ServiceUnavailable => "service_unavailable",
            Self::UpstreamFailure => "upstream_failure",
            Self::InternalError => "internal_error",
        }
    }

    /// Message used when a caller supplies a blank one.
    pub fn default_message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "The request could not be processed.",
            Self::Unauthorized => "Please log in to continue.",
            Self::ServiceUnavailable => "The service is temporarily unavailable.",
            Self::UpstreamFailure => "An unexpected error occurred. Please try again.",
            Self::InternalError => "Internal server error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a serialised payload cannot be turned back into an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// `message` was blank.
    #[error("error message must not be blank")]
    BlankMessage,
    /// `traceId` was not a UUID.
    #[error("invalid trace identifier '{value}'")]
    InvalidTraceId { value: String },
}

/// Client-facing error.
///
/// The message is never blank: constructors substitute
/// [`ErrorCode::default_message`].
///
/// # Examples
/// ```
/// use community_backend::domain::{Error, ErrorCode};
///
/// let err = Error::invalid_request("Passwords do not match");
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert_eq!(err.message(), "Passwords do not match");
///
/// let blank = Error::unauthorized("  ");
/// assert_eq!(blank.message(), ErrorCode::Unauthorized.default_message());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ErrorBody", into = "ErrorBody")]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<TraceId>,
    details: Option<Value>,
}

impl Error {
    /// Build an error with the ambient trace id.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            code.default_message().to_owned()
        } else {
            message
        };
        Self {
            code,
            message,
            trace_id: TraceId::current(),
            details: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Trace id captured at construction, or attached later.
    pub fn trace_id(&self) -> Option<TraceId> {
        self.trace_id
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Replace the trace id.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Attach structured details such as the offending form field.
    ///
    /// # Examples
    /// ```
    /// use community_backend::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("Please enter a valid email address")
    ///     .with_details(json!({ "field": "email", "code": "invalid_email" }));
    /// assert_eq!(err.details().and_then(|d| d.get("field")), Some(&json!("email")));
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Copy safe to send to a client: internal errors lose their message and
    /// details but keep the trace id.
    #[must_use]
    pub fn redacted(&self) -> Self {
        if self.code != ErrorCode::InternalError {
            return self.clone();
        }
        Self {
            code: self.code,
            message: ErrorCode::InternalError.default_message().to_owned(),
            trace_id: self.trace_id,
            details: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    pub fn upstream_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamFailure, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

/// Wire shape of [`Error`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<Error> for ErrorBody {
    fn from(error: Error) -> Self {
        Self {
            code: error.code,
            message: error.message,
            trace_id: error.trace_id.map(|id| id.to_string()),
            details: error.details,
        }
    }
}

impl TryFrom<ErrorBody> for Error {
    type Error = ErrorValidationError;

    fn try_from(body: ErrorBody) -> Result<Self, Self::Error> {
        if body.message.trim().is_empty() {
            return Err(ErrorValidationError::BlankMessage);
        }
        let trace_id = body
            .trace_id
            .map(|value| {
                value
                    .parse::<TraceId>()
                    .map_err(|_| ErrorValidationError::InvalidTraceId { value })
            })
            .transpose()?;
        Ok(Self {
            code: body.code,
            message: body.message,
            trace_id,
            details: body.details,
        })
    }
}
