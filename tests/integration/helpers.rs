//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use knowledgehub_core::config::AppConfig;

const TEST_CONFIG: &str = r#"
[jwt]
secret = "integration-test-secret"
access_token_ttl_seconds = 900
refresh_token_ttl_seconds = 604800
signing_algorithm = "HS256"

[logging]
level = "warn"
format = "pretty"
"#;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application backed by a fresh in-memory directory
    pub fn new() -> Self {
        Self::with_config(TEST_CONFIG)
    }

    /// Create a test application from a TOML configuration document
    pub fn with_config(toml: &str) -> Self {
        let config = AppConfig::from_toml(toml).expect("Failed to parse test config");
        let state = knowledgehub_api::app::build_state(&config).expect("Failed to build state");
        let router = knowledgehub_api::build_app(state);

        Self { router, config }
    }

    /// Login and return the full JSON response
    pub async fn login(&self, username: &str, password: &str) -> Value {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self
            .request("POST", "/v1/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body
    }

    /// Login as the seeded admin and return the access token
    pub async fn admin_token(&self) -> String {
        self.login("admin", "password")
            .await
            .get("access_token")
            .and_then(|v| v.as_str())
            .expect("No access_token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let auth = token.map(|t| format!("Bearer {}", t));
        self.request_with_header(method, path, body, auth.as_deref())
            .await
    }

    /// Make an HTTP request with a raw `Authorization` header value
    pub async fn request_with_header(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// String field of the body, if present
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.body.get(key).and_then(|v| v.as_str())
    }
}
