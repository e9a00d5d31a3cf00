//! Token validation and signing failures.

use knowledgehub_core::error::{AppError, ErrorKind};
use knowledgehub_core::types::UserId;
use thiserror::Error;

/// Why a token operation failed.
///
/// None of these are retried by the service itself; the caller decides
/// whether to re-authenticate or re-refresh.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Malformed input, wrong algorithm, bad signature, wrong purpose, or a
    /// garbled credential header.
    #[error("invalid token")]
    InvalidToken,
    /// Signature and structure are valid but the expiry has passed.
    #[error("token has expired")]
    ExpiredToken,
    /// The token verifies but its payload does not have the expected shape.
    #[error("invalid token claims")]
    InvalidClaims,
    /// Signing failed. Not expected with well-formed inputs.
    #[error("failed to sign token: {0}")]
    Signing(String),
    /// A refresh token named a subject the identity source does not know.
    #[error("unknown token subject {0}")]
    UnknownSubject(UserId),
    /// The identity source failed while resolving a refresh token subject.
    #[error("identity lookup failed: {0}")]
    IdentityLookup(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        let kind = match err {
            TokenError::InvalidToken
            | TokenError::ExpiredToken
            | TokenError::InvalidClaims
            | TokenError::UnknownSubject(_) => ErrorKind::Unauthorized,
            TokenError::Signing(_) | TokenError::IdentityLookup(_) => ErrorKind::Internal,
        };
        AppError::with_source(kind, err.to_string(), err)
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind as JwtErrorKind;

        match err.kind() {
            JwtErrorKind::ExpiredSignature => Self::ExpiredToken,
            // Reached only after the signature checked out, so the payload
            // was produced with our secret but has the wrong shape.
            JwtErrorKind::Json(_) | JwtErrorKind::MissingRequiredClaim(_) => Self::InvalidClaims,
            _ => Self::InvalidToken,
        }
    }
}
