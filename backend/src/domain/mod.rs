//! Domain primitives and services.
//!
//! Purpose: hold the credential forms, the submission controller and the
//! category browser without any knowledge of HTTP or the provider's wire
//! format. Inbound and outbound adapters depend on this module, never the
//! reverse.
//!
//! Public surface:
//! - [`Error`] and [`ErrorCode`]: client-facing error payload.
//! - [`TraceId`]: request-scoped correlation id.
//! - `auth`: signup and login forms plus provider message normalisation.
//! - `categories`: category records, filtering and the catalogue.
//! - `ports`: driven ports implemented by outbound adapters.

pub mod auth;
pub mod categories;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use community_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("sign in first"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
