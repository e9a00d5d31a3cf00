//! Token signing configuration.

use serde::{Deserialize, Serialize};

/// Signing secret, algorithm, and token lifetimes.
///
/// Built once at startup and handed to the token service by value; nothing
/// in the process mutates it afterwards.
#[derive(Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Shared HMAC secret. Required and non-empty.
    #[serde(default)]
    pub secret: String,
    /// Access token TTL in seconds.
    #[serde(default = "default_access_ttl")]
    pub access_token_ttl_seconds: i64,
    /// Refresh token TTL in seconds.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_token_ttl_seconds: i64,
    /// Signing algorithm identifier, e.g. `"HS256"`.
    #[serde(default = "default_algorithm")]
    pub signing_algorithm: String,
}

impl JwtConfig {
    /// Creates a configuration with the given secret and default lifetimes.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_ttl_seconds: default_access_ttl(),
            refresh_token_ttl_seconds: default_refresh_ttl(),
            signing_algorithm: default_algorithm(),
        }
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_ttl_seconds", &self.access_token_ttl_seconds)
            .field("refresh_token_ttl_seconds", &self.refresh_token_ttl_seconds)
            .field("signing_algorithm", &self.signing_algorithm)
            .finish()
    }
}

fn default_access_ttl() -> i64 {
    900
}

fn default_refresh_ttl() -> i64 {
    604_800
}

fn default_algorithm() -> String {
    "HS256".to_string()
}
