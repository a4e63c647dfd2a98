//! HTTP rendering of [`Error`].
//!
//! Picks the status for each [`ErrorCode`], echoes the trace id header and
//! sends the redacted payload. Malformed JSON bodies are routed through the
//! same payload by [`json_config`].

use actix_web::http::StatusCode;
use actix_web::http::header::{CACHE_CONTROL, HeaderValue};
use actix_web::{HttpResponse, ResponseError, web};
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

pub use crate::domain::ApiResult;

/// HTTP status for each error code.
pub fn http_status(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::UpstreamFailure => StatusCode::BAD_GATEWAY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        http_status(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(code = %self.code(), message = self.message(), status = status.as_u16(), "request failed");
        } else {
            debug!(code = %self.code(), status = status.as_u16(), "request rejected");
        }

        let mut builder = HttpResponse::build(status);
        builder.insert_header((CACHE_CONTROL, HeaderValue::from_static("no-store")));
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_string()));
        }
        builder.json(self.redacted())
    }
}

/// Client-side actix failures keep their message; anything else is internal.
impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        let status = err.as_response_error().status_code();
        if status.is_client_error() {
            Error::invalid_request(err.to_string())
        } else {
            error!(error = %err, "framework error");
            Error::internal(err.to_string())
        }
    }
}

/// JSON extractor settings that answer malformed bodies with [`Error`].
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("Malformed request body: {err}"))
            .with_details(serde_json::json!({ "code": "malformed_body" }))
            .into()
    })
}

#[cfg(test)]
mod tests;
