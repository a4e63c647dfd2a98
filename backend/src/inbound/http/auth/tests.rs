//! HTTP tests for the signup, login and session handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::auth::{INCORRECT_CREDENTIALS_MESSAGE, VERIFY_EMAIL_MESSAGE};
use crate::domain::ports::{
    AuthProviderError, FIXTURE_EMAIL, FIXTURE_PASSWORD, FIXTURE_UNVERIFIED_EMAIL,
    FixtureAuthProvider, MockAuthProvider,
};
use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};

fn app_with(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(web::Data::new(state)).service(
        web::scope("/api/v1")
            .wrap(test_session_middleware())
            .service(signup)
            .service(login)
            .service(current_session)
            .service(logout),
    )
}

fn fixture_state() -> HttpState {
    HttpState::new(Some(Arc::new(FixtureAuthProvider)), None)
}

async fn post_json(state: HttpState, uri: &str, body: Value) -> (StatusCode, Value) {
    let app = actix_test::init_service(app_with(state)).await;
    let request = actix_test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("json body")
    };
    (status, value)
}

fn signup_body() -> Value {
    json!({
        "email": "grace@example.com",
        "password": "hopper1",
        "confirmPassword": "hopper1",
        "displayName": "Grace",
        "role": "volunteer"
    })
}

#[rstest]
#[actix_web::test]
async fn signup_success_returns_confirmation() {
    let (status, body) = post_json(fixture_state(), "/api/v1/signup", signup_body()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "state": "success",
            "title": "Welcome to the Community!",
            "message": "Check your email to verify your account.",
            "redirect": {"path": "/community", "afterMs": 2000}
        })
    );
}

#[rstest]
#[case::missing_name(json!({"displayName": ""}), "displayName", "missing_field", "Please fill in all required fields")]
#[case::short(json!({"password": "abc", "confirmPassword": "abc"}), "password", "password_too_short", "Password must be at least 6 characters")]
#[case::mismatch(json!({"confirmPassword": "hopper2"}), "confirmPassword", "password_mismatch", "Passwords do not match")]
#[case::email(json!({"email": "grace@example"}), "email", "invalid_email", "Please enter a valid email address")]
#[actix_web::test]
async fn signup_validation_failures_are_bad_requests(
    #[case] overrides: Value,
    #[case] field: &str,
    #[case] code: &str,
    #[case] message: &str,
) {
    let mut body = signup_body();
    for (key, value) in overrides.as_object().expect("object overrides") {
        body[key] = value.clone();
    }
    let mut provider = MockAuthProvider::new();
    provider.expect_sign_up().never();

    let (status, payload) = post_json(
        HttpState::new(Some(Arc::new(provider)), None),
        "/api/v1/signup",
        body,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["code"], "invalid_request");
    assert_eq!(payload["message"], message);
    assert_eq!(payload["details"]["field"], field);
    assert_eq!(payload["details"]["code"], code);
}

#[rstest]
#[actix_web::test]
async fn signup_rejects_unknown_role() {
    let mut body = signup_body();
    body["role"] = json!("wizard");
    let (status, payload) = post_json(fixture_state(), "/api/v1/signup", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["details"]["field"], "role");
}

#[rstest]
#[actix_web::test]
async fn signup_provider_rejection_is_passed_through() {
    let mut body = signup_body();
    body["email"] = json!(FIXTURE_EMAIL);
    let (status, payload) = post_json(fixture_state(), "/api/v1/signup", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["message"], "User already registered");
    assert_eq!(payload["details"]["code"], "provider_rejected");
}

#[rstest]
#[case("/api/v1/signup", signup_body())]
#[case("/api/v1/login", json!({"email": FIXTURE_EMAIL, "password": FIXTURE_PASSWORD}))]
#[actix_web::test]
async fn unconfigured_auth_is_unavailable(#[case] uri: &str, #[case] body: Value) {
    let (status, payload) = post_json(HttpState::default(), uri, body).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        payload["message"],
        "Authentication service is not configured. Please try again later."
    );
}

#[rstest]
#[case(FIXTURE_EMAIL, "wrong-password", INCORRECT_CREDENTIALS_MESSAGE)]
#[case(FIXTURE_UNVERIFIED_EMAIL, FIXTURE_PASSWORD, VERIFY_EMAIL_MESSAGE)]
#[actix_web::test]
async fn login_rejections_are_normalised(
    #[case] email: &str,
    #[case] password: &str,
    #[case] message: &str,
) {
    let (status, payload) = post_json(
        fixture_state(),
        "/api/v1/login",
        json!({"email": email, "password": password}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(payload["code"], "unauthorized");
    assert_eq!(payload["message"], message);
}

#[rstest]
#[actix_web::test]
async fn login_blank_fields_use_login_wording() {
    let (status, payload) = post_json(
        fixture_state(),
        "/api/v1/login",
        json!({"email": "", "password": ""}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["message"], "Please enter your email and password");
}

#[rstest]
#[actix_web::test]
async fn provider_outage_is_bad_gateway() {
    let mut provider = MockAuthProvider::new();
    provider
        .expect_sign_in()
        .return_once(|_, _| Err(AuthProviderError::transport("dns failure")));

    let (status, payload) = post_json(
        HttpState::new(Some(Arc::new(provider)), None),
        "/api/v1/login",
        json!({"email": "grace@example.com", "password": "anything"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(payload["message"], "An unexpected error occurred. Please try again.");
}

#[rstest]
#[actix_web::test]
async fn login_session_and_logout_round_trip() {
    let app = actix_test::init_service(app_with(fixture_state())).await;

    let login_res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({"email": FIXTURE_EMAIL, "password": FIXTURE_PASSWORD}))
            .to_request(),
    )
    .await;
    assert_eq!(login_res.status(), StatusCode::OK);
    let cookie = session_cookie(&login_res);
    let body: Value = actix_test::read_body_json(login_res).await;
    assert_eq!(body["redirect"], json!({"path": "/community", "afterMs": 0}));
    assert!(body.get("title").is_none());

    let session_res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/session")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(session_res.status(), StatusCode::OK);
    let account: SessionBody = actix_test::read_body_json(session_res).await;
    assert_eq!(account.email, FIXTURE_EMAIL);

    let logout_res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/logout")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(logout_res.status(), StatusCode::NO_CONTENT);
}

#[rstest]
#[actix_web::test]
async fn session_without_cookie_is_unauthorised() {
    let app = actix_test::init_service(app_with(fixture_state())).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/session").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[case("/api/v1/login", json!({"password": "pw"}), "email")]
#[case("/api/v1/login", json!({"email": "grace@example.com"}), "password")]
#[case("/api/v1/signup", json!({"password": "hopper1", "confirmPassword": "hopper1", "displayName": "Grace"}), "email")]
#[actix_web::test]
async fn absent_fields_fail_as_missing(
    #[case] uri: &str,
    #[case] body: Value,
    #[case] field: &str,
) {
    let (status, payload) = post_json(fixture_state(), uri, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["details"]["code"], "missing_field");
    assert_eq!(payload["details"]["field"], field);
}

#[rstest]
#[case("/api/v1/signup", json!({"displayName": "Grace"}))]
#[case("/api/v1/login", json!({}))]
#[actix_web::test]
async fn absent_fields_still_report_unconfigured_auth(#[case] uri: &str, #[case] body: Value) {
    let (status, payload) = post_json(HttpState::default(), uri, body).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(payload["details"]["code"], "not_configured");
}
