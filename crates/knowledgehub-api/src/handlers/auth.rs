//! Auth handlers: login, register, refresh, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use knowledgehub_auth::jwt::TokenError;
use knowledgehub_core::error::AppError;

use crate::dto::request::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::{AuthResponse, MessageResponse, UserInfo};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ClientAddr, ValidatedJson};
use crate::state::AppState;

/// POST /v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    client: ClientAddr,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Some(identity) = state
        .users
        .verify_credentials(&req.username, &req.password)
        .await?
    else {
        tracing::info!(client = %client, username = %req.username, "Failed login attempt");
        return Err(AppError::unauthorized("Invalid username or password").into());
    };

    let tokens = state.tokens.issue_pair(&identity)?;
    tracing::info!(client = %client, user_id = %identity.user_id, "User logged in");

    Ok(Json(AuthResponse::new(tokens, identity.into())))
}

/// POST /v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    client: ClientAddr,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let identity = state
        .users
        .register(&req.username, &req.email, &req.password)
        .await
        .inspect_err(|e| {
            tracing::info!(client = %client, username = %req.username, error = %e, "Registration refused");
        })?;

    let tokens = state.tokens.issue_pair(&identity)?;
    tracing::info!(client = %client, user_id = %identity.user_id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new(tokens, identity.into())),
    ))
}

/// POST /v1/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    client: ClientAddr,
    ValidatedJson(req): ValidatedJson<RefreshRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (identity, tokens) = state
        .tokens
        .refresh_session(&req.refresh_token, state.users.as_ref())
        .await
        .map_err(|e| {
            tracing::info!(client = %client, error = %e, "Refresh refused");
            match e {
                TokenError::Signing(_) | TokenError::IdentityLookup(_) => ApiError::from(e),
                _ => AppError::unauthorized("Invalid or expired refresh token").into(),
            }
        })?;

    tracing::info!(client = %client, user_id = %identity.user_id, "Tokens refreshed");

    Ok(Json(AuthResponse::new(tokens, identity.into())))
}

/// POST /v1/auth/logout
///
/// Tokens are stateless; logging out means the client discards them.
pub async fn logout(auth: AuthUser, client: ClientAddr) -> Json<MessageResponse> {
    tracing::info!(client = %client, user_id = %auth.user_id, "User logged out");

    Json(MessageResponse {
        message: "Successfully logged out".to_string(),
    })
}

/// GET /v1/auth/me
pub async fn me(auth: AuthUser) -> Json<UserInfo> {
    Json(UserInfo::from(auth.context()))
}
