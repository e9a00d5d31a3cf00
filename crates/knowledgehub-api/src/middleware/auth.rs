//! Authentication gate.
//!
//! Pulls the bearer token from the `Authorization` header, validates it, and
//! either injects a [`RequestContext`] into the request extensions or
//! decides what to do with the failure. `require_auth` rejects failures with
//! `401`; `optional_auth` lets the request through anonymously. Each request
//! gets exactly one validation attempt and the gate never refreshes tokens.

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use thiserror::Error;
use tracing::{debug, info};

use knowledgehub_auth::jwt::{TokenError, TokenService};
use knowledgehub_core::error::AppError;

use crate::context::RequestContext;
use crate::error::ApiError;
use crate::extractors::client::client_address;
use crate::state::AppState;

/// Why the gate could not identify the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateRejection {
    /// No `Authorization` header, or an empty one.
    #[error("missing authorization header")]
    MissingHeader,
    /// Header present but not `Bearer <token>`.
    #[error("malformed authorization header")]
    MalformedHeader,
    /// Header well-formed but the token failed validation.
    #[error("token rejected: {0}")]
    Token(TokenError),
}

impl GateRejection {
    /// Client-facing explanation, distinct per failure so clients can tell
    /// "log in again" from "malformed request".
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingHeader => "Authorization header is required",
            Self::MalformedHeader => "Invalid authorization header format",
            Self::Token(TokenError::ExpiredToken) => "Token has expired",
            Self::Token(TokenError::InvalidToken) => "Invalid token",
            Self::Token(TokenError::InvalidClaims) => "Invalid token claims",
            Self::Token(_) => "Token validation failed",
        }
    }
}

/// Runs the gate's decision pipeline for one `Authorization` header value.
pub fn authenticate(
    tokens: &TokenService,
    header: Option<&HeaderValue>,
) -> Result<RequestContext, GateRejection> {
    let header = header.ok_or(GateRejection::MissingHeader)?;
    if header.is_empty() {
        return Err(GateRejection::MissingHeader);
    }

    let value = header
        .to_str()
        .map_err(|_| GateRejection::MalformedHeader)?;
    let token =
        TokenService::extract_credential(value).map_err(|_| GateRejection::MalformedHeader)?;

    let claims = tokens.validate_access(token).map_err(GateRejection::Token)?;
    Ok(RequestContext::from(claims))
}

/// Mandatory gate: rejects any request without a valid access token.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let client = client_address(request.headers(), request.extensions());

    match authenticate(&state.tokens, request.headers().get(AUTHORIZATION)) {
        Ok(ctx) => {
            info!(
                client = %client,
                user_id = %ctx.user_id,
                username = %ctx.username,
                "Authenticated request"
            );
            request.extensions_mut().insert(ctx);
            Ok(next.run(request).await)
        }
        Err(rejection) => {
            info!(client = %client, reason = %rejection, "Rejected request");
            Err(AppError::unauthorized(rejection.message()).into())
        }
    }
}

/// Optional gate: identifies the caller when it can, never rejects.
pub async fn optional_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let client = client_address(request.headers(), request.extensions());

    match authenticate(&state.tokens, request.headers().get(AUTHORIZATION)) {
        Ok(ctx) => {
            info!(
                client = %client,
                user_id = %ctx.user_id,
                username = %ctx.username,
                "Optionally authenticated request"
            );
            request.extensions_mut().insert(ctx);
        }
        Err(GateRejection::MissingHeader) => {
            debug!(client = %client, "Anonymous request");
        }
        Err(rejection) => {
            info!(client = %client, reason = %rejection, "Proceeding anonymously");
        }
    }

    next.run(request).await
}
