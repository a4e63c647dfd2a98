//! Tests for HTTP error rendering.

use super::*;
use actix_web::body::to_bytes;
use actix_web::{App, test as actix_test};
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};
use serde_json::json;

use crate::domain::TraceId;

#[fixture]
fn trace_id() -> TraceId {
    "00000000-0000-0000-0000-00000000002a"
        .parse()
        .expect("fixture is a UUID")
}

async fn render(error: &Error) -> (StatusCode, HttpResponse) {
    let response = ResponseError::error_response(error);
    (response.status(), response)
}

async fn payload(response: HttpResponse) -> Error {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error payload decodes")
}

#[rstest]
#[case(ErrorCode::InvalidRequest, StatusCode::BAD_REQUEST)]
#[case(ErrorCode::Unauthorized, StatusCode::UNAUTHORIZED)]
#[case(ErrorCode::ServiceUnavailable, StatusCode::SERVICE_UNAVAILABLE)]
#[case(ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR)]
fn every_code_has_a_status(#[case] code: ErrorCode, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&Error::new(code, "x")), status);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted_but_correlated(trace_id: TraceId) {
    let error = Error::internal("provider DSN leaked: postgres://secret")
        .with_trace_id(trace_id)
        .with_details(json!({"secret": "x"}));
    let (status, response) = render(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers().get(TRACE_ID_HEADER).and_then(|v| v.to_str().ok()),
        Some(trace_id.to_string().as_str())
    );
    assert_eq!(
        response.headers().get(CACHE_CONTROL).and_then(|v| v.to_str().ok()),
        Some("no-store")
    );
    let body = payload(response).await;
    assert_eq!(body.message(), "Internal server error");
    assert_eq!(body.trace_id(), Some(trace_id));
    assert!(body.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_their_details() {
    let error = Error::invalid_request("Passwords do not match")
        .with_details(json!({"field": "confirmPassword", "code": "password_mismatch"}));

    let (status, response) = render(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
    let body = payload(response).await;
    assert_eq!(body, error);
}

#[given("an upstream failure code")]
fn an_upstream_failure_code() -> ErrorCode {
    ErrorCode::UpstreamFailure
}

#[when("the adapter maps the code to an HTTP status")]
fn the_adapter_maps_the_code_to_http_status(code: ErrorCode) -> StatusCode {
    http_status(code)
}

#[then("the status is 502 Bad Gateway")]
fn the_status_is_502_bad_gateway(status: StatusCode) {
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[rstest]
fn provider_outages_map_to_bad_gateway() {
    let code = an_upstream_failure_code();
    let status = the_adapter_maps_the_code_to_http_status(code);
    the_status_is_502_bad_gateway(status);
}

#[rstest]
#[case(actix_web::error::ErrorBadRequest("bad cookie"), ErrorCode::InvalidRequest)]
#[case(actix_web::error::ErrorInternalServerError("session store"), ErrorCode::InternalError)]
fn actix_errors_keep_their_class(#[case] err: actix_web::Error, #[case] code: ErrorCode) {
    assert_eq!(Error::from(err).code(), code);
}

#[rstest]
#[actix_web::test]
async fn malformed_json_uses_the_error_payload() {
    async fn echo(body: web::Json<serde_json::Value>) -> HttpResponse {
        HttpResponse::Ok().json(body.into_inner())
    }
    let app = actix_test::init_service(
        App::new()
            .app_data(json_config())
            .route("/", web::post().to(echo)),
    )
    .await;
    let req = actix_test::TestRequest::post()
        .uri("/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"email\":")
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Error = actix_test::read_body_json(res).await;
    assert_eq!(body.details(), Some(&json!({"code": "malformed_body"})));
}
