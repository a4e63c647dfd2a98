//! Signup, login and session handlers.
//!
//! ```text
//! POST /api/v1/signup  {"email","password","confirmPassword","displayName","role"}
//! POST /api/v1/login   {"email","password"}
//! GET  /api/v1/session
//! POST /api/v1/logout
//! ```
//!
//! Handlers translate request bodies into domain forms, run them through a
//! [`FormController`] and map the final [`FormState`] onto HTTP.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};
use utoipa::ToSchema;
use zeroize::Zeroizing;

use crate::domain::Error;
use crate::domain::auth::{
    CredentialForm, FormController, FormError, FormKind, FormState, LoginForm, Role, SignupForm,
    SubmissionSuccess, UnknownRole,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::{SessionContext, SessionUser};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/v1/signup`.
#[derive(Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Absent fields read as empty and fail local validation.
    #[serde(default)]
    #[schema(example = "grace@example.com")]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: Option<String>,
    #[serde(default)]
    #[schema(example = "Grace")]
    pub display_name: Option<String>,
    /// One of `contributor`, `student`, `teacher`, `volunteer`, `ngo`,
    /// `other`; defaults to `contributor`.
    #[serde(default)]
    #[schema(example = "volunteer")]
    pub role: Option<String>,
}

impl TryFrom<SignupRequest> for SignupForm {
    type Error = UnknownRole;

    fn try_from(value: SignupRequest) -> Result<Self, Self::Error> {
        let role = match value.role.as_deref() {
            None | Some("") => Role::default(),
            Some(raw) => raw.parse()?,
        };
        Ok(Self {
            email: value.email,
            password: Zeroizing::new(value.password),
            confirm_password: value.confirm_password.map(Zeroizing::new),
            display_name: value.display_name,
            role,
        })
    }
}

/// Request body for `POST /api/v1/login`.
#[derive(Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(example = "grace@example.com")]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl From<LoginRequest> for LoginForm {
    fn from(value: LoginRequest) -> Self {
        Self {
            email: value.email,
            password: Zeroizing::new(value.password),
        }
    }
}

/// Client navigation after success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RedirectBody {
    #[schema(example = "/community")]
    pub path: String,
    /// Delay in milliseconds before navigating.
    #[schema(example = 2000)]
    pub after_ms: u64,
}

/// Success body shared by signup and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    /// Always `success`.
    #[schema(example = "success")]
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Welcome to the Community!")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Check your email to verify your account.")]
    pub message: Option<String>,
    pub redirect: RedirectBody,
}

impl From<&SubmissionSuccess> for SubmissionResponse {
    fn from(success: &SubmissionSuccess) -> Self {
        let after_ms = u64::try_from(success.redirect.after.as_millis()).unwrap_or(u64::MAX);
        Self {
            state: "success".to_owned(),
            title: success.confirmation.map(|c| c.title.to_owned()),
            message: success.confirmation.map(|c| c.message.to_owned()),
            redirect: RedirectBody {
                path: success.redirect.path.to_owned(),
                after_ms,
            },
        }
    }
}

/// Signed-in account returned by `GET /api/v1/session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionBody {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "grace@example.com")]
    pub email: String,
}

impl From<SessionUser> for SessionBody {
    fn from(user: SessionUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// Map a failed submission to the API error payload.
///
/// Provider rejections are `400` on signup and `401` on login.
pub(crate) fn form_error_to_api(kind: FormKind, error: FormError) -> Error {
    let message = error.to_string();
    match error {
        FormError::Invalid { reason, .. } => Error::invalid_request(message).with_details(json!({
            "field": reason.field().as_str(),
            "code": reason.code(),
        })),
        FormError::NotConfigured => Error::service_unavailable(message)
            .with_details(json!({ "code": "not_configured" })),
        FormError::ProviderRejected { .. } => match kind {
            FormKind::Signup => Error::invalid_request(message),
            FormKind::Login => Error::unauthorized(message),
        }
        .with_details(json!({ "code": "provider_rejected" })),
        FormError::Unexpected => Error::upstream_failure(message),
    }
}

async fn run_form<F: CredentialForm>(
    form: F,
    state: &HttpState,
) -> ApiResult<SubmissionSuccess> {
    let mut controller = FormController::new(form);
    controller.submit(&state.auth).await;
    match controller.into_state() {
        FormState::Success(success) => Ok(success),
        FormState::Failed(error) => Err(form_error_to_api(F::KIND, error)),
        other => Err(Error::internal(format!(
            "submission ended in unexpected state {other:?}"
        ))),
    }
}

/// Create an account with the authentication provider.
#[utoipa::path(
    post,
    path = "/api/v1/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created; verification email sent", body = SubmissionResponse),
        (status = 400, description = "Invalid input or provider rejection", body = ErrorSchema),
        (status = 502, description = "Provider unreachable", body = ErrorSchema),
        (status = 503, description = "Authentication not configured", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "signup",
    security([])
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<HttpResponse> {
    let form = SignupForm::try_from(payload.into_inner()).map_err(|err| {
        Error::invalid_request(err.to_string())
            .with_details(json!({ "field": "role", "code": "unknown_role" }))
    })?;
    let success = run_form(form, &state).await?;
    info!(account_id = %success.user.id, "account created");
    Ok(HttpResponse::Created().json(SubmissionResponse::from(&success)))
}

/// Sign in and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = SubmissionResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid input", body = ErrorSchema),
        (status = 401, description = "Credentials refused", body = ErrorSchema),
        (status = 502, description = "Provider unreachable", body = ErrorSchema),
        (status = 503, description = "Authentication not configured", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let success = run_form(LoginForm::from(payload.into_inner()), &state).await?;
    session.persist_user(&SessionUser::from(success.user.clone()))?;
    debug!(email = %success.user.email, "session established");
    Ok(HttpResponse::Ok().json(SubmissionResponse::from(&success)))
}

/// Return the signed-in account.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses(
        (status = 200, description = "Signed-in account", body = SessionBody),
        (status = 401, description = "No session", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "currentSession"
)]
#[get("/session")]
pub async fn current_session(session: SessionContext) -> ApiResult<web::Json<SessionBody>> {
    Ok(web::Json(session.require_user()?.into()))
}

/// Clear the session.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["auth"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    HttpResponse::NoContent().finish()
}

#[cfg(test)]
mod tests;
