//! # knowledgehub-auth
//!
//! Stateless token lifecycle for KnowledgeHub.
//!
//! ## Modules
//!
//! - `jwt`: access/refresh token issuance, validation, and rotation
//! - `identity`: identity records and the user directory the login and
//!   refresh flows resolve them from

pub mod identity;
pub mod jwt;

pub use identity::{Identity, IdentitySource, InMemoryUserDirectory, UserDirectory};
pub use jwt::{AccessClaims, RefreshClaims, TokenError, TokenPair, TokenPurpose, TokenService};
