//! Token lifecycle: issue, validate, rotate.

use std::str::FromStr;

use jsonwebtoken::Algorithm;

use knowledgehub_core::config::JwtConfig;
use knowledgehub_core::error::AppError;

use super::claims::{AccessClaims, RefreshClaims};
use super::decoder::JwtDecoder;
use super::encoder::{JwtEncoder, TokenPair};
use super::error::TokenError;
use crate::identity::{Identity, IdentitySource};

/// Prefix of the `Authorization` header value carrying a token.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Issues and verifies self-contained bearer tokens.
///
/// Holds only read-only key material, so a single instance can be shared
/// across request tasks without locking.
#[derive(Debug, Clone)]
pub struct TokenService {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl TokenService {
    /// Builds the service from its configuration.
    ///
    /// Fails if the secret is empty or the algorithm is not an HMAC one.
    pub fn new(config: JwtConfig) -> Result<Self, AppError> {
        if config.secret.is_empty() {
            return Err(AppError::configuration("JWT secret must not be empty"));
        }

        let algorithm = Algorithm::from_str(&config.signing_algorithm).map_err(|e| {
            AppError::configuration(format!(
                "Unknown signing algorithm '{}': {e}",
                config.signing_algorithm
            ))
        })?;

        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(AppError::configuration(format!(
                "Signing algorithm '{}' is not supported, use HS256, HS384 or HS512",
                config.signing_algorithm
            )));
        }

        Ok(Self {
            encoder: JwtEncoder::new(&config, algorithm),
            decoder: JwtDecoder::new(&config, algorithm),
        })
    }

    /// Issues a fresh access + refresh pair.
    pub fn issue_pair(&self, identity: &Identity) -> Result<TokenPair, TokenError> {
        self.encoder.generate_token_pair(identity)
    }

    /// Validates an access token and returns its identity claims.
    pub fn validate_access(&self, token: &str) -> Result<AccessClaims, TokenError> {
        self.decoder.decode_access_token(token)
    }

    /// Validates a refresh token and returns its minimal claims.
    pub fn validate_refresh(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        self.decoder.decode_refresh_token(token)
    }

    /// Exchanges a refresh token for a new pair.
    ///
    /// The profile embedded in the new access token is resolved from the
    /// refresh token's subject, never taken from the caller.
    pub async fn refresh_pair<S>(
        &self,
        refresh_token: &str,
        identities: &S,
    ) -> Result<TokenPair, TokenError>
    where
        S: IdentitySource + ?Sized,
    {
        self.refresh_session(refresh_token, identities)
            .await
            .map(|(_, pair)| pair)
    }

    /// Like [`refresh_pair`](Self::refresh_pair), also returning the
    /// identity the new pair was issued for.
    pub async fn refresh_session<S>(
        &self,
        refresh_token: &str,
        identities: &S,
    ) -> Result<(Identity, TokenPair), TokenError>
    where
        S: IdentitySource + ?Sized,
    {
        let claims = self.validate_refresh(refresh_token)?;

        let identity = identities
            .find_identity(claims.user_id)
            .await
            .map_err(|e| TokenError::IdentityLookup(e.message))?
            .ok_or(TokenError::UnknownSubject(claims.user_id))?;

        let pair = self.issue_pair(&identity)?;
        Ok((identity, pair))
    }

    /// Extracts the token from an `Authorization` header value.
    ///
    /// The prefix is matched exactly; whatever follows it is returned
    /// verbatim, including an empty string.
    pub fn extract_credential(header: &str) -> Result<&str, TokenError> {
        header
            .strip_prefix(BEARER_PREFIX)
            .ok_or(TokenError::InvalidToken)
    }
}
