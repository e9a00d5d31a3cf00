//! Response DTOs.

use serde::{Deserialize, Serialize};

use knowledgehub_auth::identity::Identity;
use knowledgehub_auth::jwt::TokenPair;
use knowledgehub_core::types::UserId;

use crate::context::RequestContext;

/// Tokens plus the user they were issued for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token expiration (seconds since epoch).
    pub expires_at: i64,
    /// User info.
    pub user: UserInfo,
}

impl AuthResponse {
    /// Pairs issued tokens with the user's public profile.
    pub fn new(tokens: TokenPair, user: UserInfo) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_at: tokens.expires_at,
            user,
        }
    }
}

/// Public user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl From<Identity> for UserInfo {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.user_id,
            username: identity.username,
            email: identity.email,
        }
    }
}

impl From<&RequestContext> for UserInfo {
    fn from(ctx: &RequestContext) -> Self {
        Self {
            id: ctx.user_id,
            username: ctx.username.clone(),
            email: ctx.email.clone(),
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Translation history response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Message.
    pub message: String,
    /// The caller, when one was identified.
    pub user: Option<UserInfo>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
