//! Claims carried by access and refresh tokens.
//!
//! Both token kinds share one wire shape, [`Claims`], told apart by the
//! `purpose` field. Validation always checks the purpose before handing out
//! one of the typed views, [`AccessClaims`] or [`RefreshClaims`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use knowledgehub_core::types::UserId;

use super::error::TokenError;

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenPurpose {
    /// Short-lived token for API requests.
    Access,
    /// Long-lived token for obtaining a new pair.
    Refresh,
    /// Any other value. Never issued; rejected by both typed views.
    #[serde(other)]
    Unknown,
}

/// Wire payload of every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user ID in decimal.
    pub sub: String,
    /// Username. Access tokens only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Contact email. Access tokens only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// What the token may be used for.
    pub purpose: TokenPurpose,
    /// Issuer.
    pub iss: String,
    /// Issued-at (seconds since epoch).
    pub iat: i64,
    /// Not-before (seconds since epoch), equal to `iat`.
    pub nbf: i64,
    /// Expiration (seconds since epoch).
    pub exp: i64,
    /// Unique token ID.
    pub jti: Uuid,
}

/// Identity claims returned by access token validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub issuer: String,
    pub issued_at: DateTime<Utc>,
    pub not_before: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub token_id: Uuid,
}

/// Minimal claims returned by refresh token validation.
///
/// Profile data is intentionally absent: callers resolve it from the
/// subject so a stale username or email is never re-issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub user_id: UserId,
    pub issuer: String,
    pub issued_at: DateTime<Utc>,
    pub not_before: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub token_id: Uuid,
}

impl Claims {
    fn user_id(&self) -> Result<UserId, TokenError> {
        self.sub.parse().map_err(|_| TokenError::InvalidClaims)
    }
}

fn timestamp(secs: i64) -> Result<DateTime<Utc>, TokenError> {
    DateTime::from_timestamp(secs, 0).ok_or(TokenError::InvalidClaims)
}

impl TryFrom<Claims> for AccessClaims {
    type Error = TokenError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        if claims.purpose != TokenPurpose::Access {
            return Err(TokenError::InvalidToken);
        }

        let user_id = claims.user_id()?;
        let (Some(username), Some(email)) = (claims.username, claims.email) else {
            return Err(TokenError::InvalidClaims);
        };

        Ok(Self {
            user_id,
            username,
            email,
            issuer: claims.iss,
            issued_at: timestamp(claims.iat)?,
            not_before: timestamp(claims.nbf)?,
            expires_at: timestamp(claims.exp)?,
            token_id: claims.jti,
        })
    }
}

impl TryFrom<Claims> for RefreshClaims {
    type Error = TokenError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        if claims.purpose != TokenPurpose::Refresh {
            return Err(TokenError::InvalidToken);
        }

        Ok(Self {
            user_id: claims.user_id()?,
            issuer: claims.iss,
            issued_at: timestamp(claims.iat)?,
            not_before: timestamp(claims.nbf)?,
            expires_at: timestamp(claims.exp)?,
            token_id: claims.jti,
        })
    }
}
