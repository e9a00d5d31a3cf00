//! JWT token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};

use knowledgehub_core::config::JwtConfig;

use super::ISSUER;
use super::claims::{AccessClaims, Claims, RefreshClaims};
use super::error::TokenError;

/// Verifies tokens against the configured secret and algorithm.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// The only algorithm a token may declare.
    algorithm: Algorithm,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("algorithm", &self.algorithm)
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from token configuration.
    pub fn new(config: &JwtConfig, algorithm: Algorithm) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        // No clock skew allowance: nbf equals iat.
        validation.leeway = 0;
        validation.set_issuer(&[ISSUER]);
        validation.set_required_spec_claims(&["exp", "iat", "nbf", "iss", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            algorithm,
            validation,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Checks:
    /// 1. Header algorithm matches the configured one
    /// 2. Signature validity
    /// 3. Expiration and not-before
    /// 4. Purpose is `access`
    /// 5. Profile claims are present
    pub fn decode_access_token(&self, token: &str) -> Result<AccessClaims, TokenError> {
        AccessClaims::try_from(self.decode_token(token)?)
    }

    /// Decodes and validates a refresh token string.
    pub fn decode_refresh_token(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        RefreshClaims::try_from(self.decode_token(token)?)
    }

    /// Internal decode without purpose checking.
    fn decode_token(&self, token: &str) -> Result<Claims, TokenError> {
        let header = decode_header(token).map_err(|_| TokenError::InvalidToken)?;
        if header.alg != self.algorithm {
            return Err(TokenError::InvalidToken);
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }
}
