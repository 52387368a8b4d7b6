// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use std::sync::Arc;
use vecinal_core::application::{
    ports::{security::TokenVerifier, time::Clock},
    services::ApplicationServices,
};
use vecinal_core::domain::user::UserRepository;
use vecinal_core::presentation::http::{routes::build_router, state::HttpState};

pub fn build_test_state(user_repo: Arc<dyn UserRepository>) -> HttpState {
    let token_verifier: Arc<dyn TokenVerifier> = Arc::new(mocks::DummyTokenVerifier);
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock::later());

    let services = Arc::new(ApplicationServices::new(user_repo, token_verifier, clock));
    HttpState { services }
}

pub fn make_test_router(user_repo: Arc<dyn UserRepository>) -> axum::Router {
    build_router(build_test_state(user_repo))
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn patch_json(uri: &str, token: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn patch_raw(
    uri: &str,
    token: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method("PATCH")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"));
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder.body(Body::from(body)).unwrap()
}

/// Split a response into its status and parsed JSON body.
pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json = serde_json::from_slice(&bytes).expect("expected a JSON body");
    (status, json)
}

/// Assert that a response is an `ErrorResponse` with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status, "body: {json}");
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    assert!(json.get("timestamp").is_some(), "expected timestamp field");
    json
}
