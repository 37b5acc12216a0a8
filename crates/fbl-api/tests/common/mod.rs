use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use fbl_api::{
    config::{ApiConfig, Environment},
    router,
    state::ApiState,
};
use http_body_util::BodyExt;
use reqwest::Url;
use serde::Deserialize;
use tower::ServiceExt;

/// Config pointing every outbound Graph call at `graph_base`: a wiremock
/// server in most tests, an unroutable address where no call is expected.
pub fn test_config(graph_base: &str) -> ApiConfig {
    ApiConfig {
        app_id: "test_app_id".to_string(),
        app_secret: "test_app_secret".to_string(),
        port: 3000,
        public_base_url: "http://localhost:3000".to_string(),
        public_dir: PathBuf::from("tests/public"),
        graph_base_url: Url::parse(graph_base).expect("graph base url"),
        dialog_base_url: Url::parse("https://www.facebook.com").expect("dialog base url"),
        verify_signed_requests: false,
        env: Environment::Development,
    }
}

/// Build the full app router for a config and wrap it in a test client.
pub fn build_app(config: &ApiConfig) -> TestClient {
    let state = ApiState::new(config).expect("failed to build state");
    TestClient::new(router::router(&config.public_dir).with_state(state))
}

/// Helper to make in-process requests to the app.
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Send a request and collect the response.
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Send a GET request.
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with a form-urlencoded body.
    pub async fn post_form(&self, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.request(request).await
    }
}

/// Test response wrapper.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Get the response body as a string.
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse the response body as JSON.
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get a header value as a string, panicking when absent.
    pub fn header(&self, name: header::HeaderName) -> String {
        self.headers
            .get(&name)
            .unwrap_or_else(|| panic!("missing header {name}"))
            .to_str()
            .expect("header is not valid UTF-8")
            .to_string()
    }

    /// Assert the status code.
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }
}
