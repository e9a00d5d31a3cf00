//! Integration tests for the authentication flow.

mod helpers;

use axum::http::StatusCode;

use knowledgehub_auth::jwt::TokenService;

#[tokio::test]
async fn test_healthz() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/healthz", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.str_field("status"), Some("ok"));
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new();

    let body = app.login("admin", "password").await;

    assert!(body.get("access_token").and_then(|v| v.as_str()).is_some());
    assert!(body.get("refresh_token").and_then(|v| v.as_str()).is_some());
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["username"], "admin");
    assert_eq!(body["user"]["email"], "admin@example.com");
}

#[tokio::test]
async fn test_login_tokens_validate_with_same_config() {
    let app = helpers::TestApp::new();
    let token = app.admin_token().await;

    let tokens = TokenService::new(app.config.jwt.clone()).unwrap();
    let claims = tokens.validate_access(&token).unwrap();

    assert_eq!(claims.user_id.get(), 1);
    assert_eq!(claims.username, "admin");
    assert_eq!(claims.issuer, "KnowledgeHub");
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/v1/auth/login",
            Some(serde_json::json!({
                "username": "admin",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_malformed_body() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/v1/auth/login",
            Some(serde_json::json!({ "username": "admin" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_then_login() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/v1/auth/register",
            Some(serde_json::json!({
                "username": "newuser",
                "email": "newuser@example.com",
                "password": "secret123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["user"]["username"], "newuser");
    assert_eq!(response.body["user"]["id"], 2);

    let body = app.login("newuser", "secret123").await;
    assert_eq!(body["user"]["email"], "newuser@example.com");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/v1/auth/register",
            Some(serde_json::json!({
                "username": "admin",
                "email": "other@example.com",
                "password": "secret123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_invalid_fields() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/v1/auth/register",
            Some(serde_json::json!({
                "username": "ab",
                "email": "not-an-email",
                "password": "123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_me_authenticated() {
    let app = helpers::TestApp::new();
    let token = app.admin_token().await;

    let response = app.request("GET", "/v1/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], 1);
    assert_eq!(response.str_field("username"), Some("admin"));
    assert_eq!(response.str_field("email"), Some("admin@example.com"));
}

#[tokio::test]
async fn test_me_without_header() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/v1/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.str_field("message"),
        Some("Authorization header is required")
    );
}

#[tokio::test]
async fn test_me_with_wrong_scheme() {
    let app = helpers::TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request_with_header("GET", "/v1/auth/me", None, Some(&format!("Token {}", token)))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.str_field("message"),
        Some("Invalid authorization header format")
    );
}

#[tokio::test]
async fn test_me_with_garbage_token() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/v1/auth/me", None, Some("not.a.jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.str_field("message"), Some("Invalid token"));
}

#[tokio::test]
async fn test_me_rejects_refresh_token() {
    let app = helpers::TestApp::new();
    let body = app.login("admin", "password").await;
    let refresh = body["refresh_token"].as_str().unwrap().to_string();

    let response = app
        .request("GET", "/v1/auth/me", None, Some(&refresh))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_history_anonymous() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/v1/translation/history", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.str_field("message"), Some("success"));
    assert!(response.body["user"].is_null());
}

#[tokio::test]
async fn test_history_with_invalid_token_stays_anonymous() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/v1/translation/history", None, Some("garbage"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["user"].is_null());
}

#[tokio::test]
async fn test_history_authenticated() {
    let app = helpers::TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request("GET", "/v1/translation/history", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["id"], 1);
    assert_eq!(response.body["user"]["username"], "admin");
}

#[tokio::test]
async fn test_refresh_issues_new_tokens() {
    let app = helpers::TestApp::new();
    let body = app.login("admin", "password").await;
    let access = body["access_token"].as_str().unwrap().to_string();
    let refresh = body["refresh_token"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            "/v1/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let new_access = response.str_field("access_token").unwrap();
    let new_refresh = response.str_field("refresh_token").unwrap();
    assert_ne!(new_access, access);
    assert_ne!(new_refresh, refresh);
    assert_eq!(response.body["user"]["username"], "admin");

    let me = app
        .request("GET", "/v1/auth/me", None, Some(new_access))
        .await;
    assert_eq!(me.status, StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_reports_user_when_access_ttl_is_spent() {
    let app = helpers::TestApp::with_config(
        r#"
        [jwt]
        secret = "integration-test-secret"
        access_token_ttl_seconds = -1
        refresh_token_ttl_seconds = 3600
        "#,
    );
    let body = app.login("admin", "password").await;
    let refresh = body["refresh_token"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            "/v1/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["id"], 1);
    assert_eq!(response.body["user"]["username"], "admin");
    assert_eq!(response.body["user"]["email"], "admin@example.com");
}

#[tokio::test]
async fn test_refresh_with_access_token_rejected() {
    let app = helpers::TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/v1/auth/refresh",
            Some(serde_json::json!({ "refresh_token": token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.str_field("message"),
        Some("Invalid or expired refresh token")
    );
}

#[tokio::test]
async fn test_logout() {
    let app = helpers::TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request("POST", "/v1/auth/logout", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.str_field("message"),
        Some("Successfully logged out")
    );
}

#[tokio::test]
async fn test_logout_requires_token() {
    let app = helpers::TestApp::new();

    let response = app.request("POST", "/v1/auth/logout", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
