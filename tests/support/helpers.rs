// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;

use pagewright::application::ports::time::Clock;
use pagewright::application::services::ApplicationServices;
use pagewright::infrastructure::util::DefaultSlugGenerator;
use pagewright::presentation::http::{routes::build_router, state::HttpState};

/// Services wired to in-memory stores, with handles on the stores so tests
/// can inspect what was written.
pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub pages: Arc<mocks::InMemoryPageStore>,
    pub users: Arc<mocks::InMemoryUserRepo>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_parts(
            mocks::InMemoryUserRepo::seeded(),
            Arc::new(mocks::SteppingClock::new()),
        )
    }

    pub fn with_parts(users: mocks::InMemoryUserRepo, clock: Arc<dyn Clock>) -> Self {
        let pages = Arc::new(mocks::InMemoryPageStore::new());
        let users = Arc::new(users);

        let services = Arc::new(ApplicationServices::new(
            users.clone(),
            pages.clone(),
            pages.clone(),
            pages.clone(),
            pages.clone(),
            Arc::new(mocks::DummyPasswordHasher),
            Arc::new(mocks::DummyTokenManager),
            clock,
            Arc::new(DefaultSlugGenerator),
        ));

        Self {
            services,
            pages,
            users,
        }
    }

    pub fn router(&self) -> Router {
        build_router(HttpState::new(Arc::clone(&self.services)), &[])
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn make_test_router() -> Router {
    TestContext::new().router()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("build json request")
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::empty()).expect("build request")
}

pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        panic!(
            "expected json body ({err}), got: {}",
            String::from_utf8_lossy(&bytes)
        )
    });
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let (_, json) = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
