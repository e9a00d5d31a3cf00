//! JWT token encoding, decoding, and claims management.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod service;

pub use claims::{AccessClaims, Claims, RefreshClaims, TokenPurpose};
pub use decoder::JwtDecoder;
pub use encoder::{JwtEncoder, TokenPair};
pub use error::TokenError;
pub use service::TokenService;

/// Issuer stamped into every token and required on verification.
pub const ISSUER: &str = "KnowledgeHub";
