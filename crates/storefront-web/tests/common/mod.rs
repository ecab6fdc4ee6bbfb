//! Common test utilities for the admin dashboard integration tests

#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use futures_util::StreamExt;
use storefront_core::Config;
use storefront_web::build_app;
use std::sync::Once;
use tower::ServiceExt;
use wiremock::MockServer;

/// Token used by authenticated requests
pub const TOKEN: &str = "test-token";

/// `Authorization` header value the backend should see
pub const BEARER: &str = "Bearer test-token";

static INIT_LOGGER: Once = Once::new();

/// Initialize test logging (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Test configuration builder
pub struct TestConfigBuilder {
    config: Config,
}

impl TestConfigBuilder {
    /// Defaults with no backend configured
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Point the dashboard at a backend
    pub fn with_backend(mut self, url: &str) -> Self {
        self.config.backend.base_url = Some(url.to_string());
        self
    }

    /// Use the static placeholder reports
    pub fn without_reports(mut self) -> Self {
        self.config.reports.enabled = false;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Start a mock backend
pub async fn mock_backend() -> MockServer {
    init_test_logging();
    MockServer::start().await
}

/// Application wired to `backend`
pub fn app_for(backend: &MockServer) -> Router {
    build_app(TestConfigBuilder::new().with_backend(&backend.uri()).build())
}

/// Navigation request, with the session cookie when `token` is given
pub fn get(path: &str, token: Option<&str>) -> Request<Body> {
    request(Method::GET, path, token, Body::empty())
}

/// URL-encoded form submission
pub fn post_form(path: &str, token: Option<&str>, form: &str) -> Request<Body> {
    let mut request = request(Method::POST, path, token, Body::from(form.to_string()));
    request.headers_mut().insert(
        header::CONTENT_TYPE,
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    request
}

fn request(method: Method, path: &str, token: Option<&str>, body: Body) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("userToken={token}"));
    }
    builder.body(body).unwrap()
}

/// Response parts the tests look at
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// `Location` header of a redirect
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    /// All `Set-Cookie` headers
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::to_string)
            .collect()
    }

    /// Assert a 303 redirect to `path`
    pub fn assert_redirect(&self, path: &str) {
        assert_eq!(self.status, StatusCode::SEE_OTHER, "body: {}", self.body);
        assert_eq!(self.location(), Some(path));
    }
}

/// Run one request through the app
pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

/// Run one request and collect the body chunk by chunk
pub async fn send_chunks(app: Router, request: Request<Body>) -> Vec<String> {
    let response = app.oneshot(request).await.unwrap();
    let mut stream = response.into_body().into_data_stream();
    let mut chunks = Vec::new();
    while let Some(chunk) = stream.next().await {
        chunks.push(String::from_utf8(chunk.unwrap().to_vec()).unwrap());
    }
    chunks
}
