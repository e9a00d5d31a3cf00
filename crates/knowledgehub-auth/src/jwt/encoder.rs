//! JWT token creation with configurable signing and TTL.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use knowledgehub_core::config::JwtConfig;

use super::ISSUER;
use super::claims::{Claims, TokenPurpose};
use super::error::TokenError;
use crate::identity::Identity;

/// Creates signed JWT access and refresh tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Header carrying the configured algorithm.
    header: Header,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("algorithm", &self.header.alg)
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

/// Result of a successful token pair generation.
///
/// `expires_at` is the access token's expiry; the refresh token's own
/// expiry is not surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration (seconds since epoch).
    pub expires_at: i64,
}

impl JwtEncoder {
    /// Creates a new encoder from token configuration.
    pub fn new(config: &JwtConfig, algorithm: Algorithm) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            header: Header::new(algorithm),
            access_ttl: Duration::seconds(config.access_token_ttl_seconds),
            refresh_ttl: Duration::seconds(config.refresh_token_ttl_seconds),
        }
    }

    /// Generates a new access + refresh token pair for the given identity.
    pub fn generate_token_pair(&self, identity: &Identity) -> Result<TokenPair, TokenError> {
        let now = Utc::now();
        let access_exp = now + self.access_ttl;
        let refresh_exp = now + self.refresh_ttl;

        let access_claims = Claims {
            sub: identity.user_id.to_string(),
            username: Some(identity.username.clone()),
            email: Some(identity.email.clone()),
            purpose: TokenPurpose::Access,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: access_exp.timestamp(),
            jti: Uuid::new_v4(),
        };

        let refresh_claims = Claims {
            sub: identity.user_id.to_string(),
            username: None,
            email: None,
            purpose: TokenPurpose::Refresh,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: refresh_exp.timestamp(),
            jti: Uuid::new_v4(),
        };

        Ok(TokenPair {
            access_token: self.sign(&access_claims)?,
            refresh_token: self.sign(&refresh_claims)?,
            expires_at: access_exp.timestamp(),
        })
    }

    fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&self.header, claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }
}
