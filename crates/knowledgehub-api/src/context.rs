//! Identity attached to a request by the authentication gate.

use serde::{Deserialize, Serialize};

use knowledgehub_auth::jwt::AccessClaims;
use knowledgehub_core::types::UserId;

/// Context for the current authenticated request.
///
/// Inserted into the request extensions by the gate and read back by the
/// [`AuthUser`](crate::extractors::AuthUser) and
/// [`MaybeAuthUser`](crate::extractors::MaybeAuthUser) extractors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The username (from the access token).
    pub username: String,
    /// The contact email (from the access token).
    pub email: String,
    /// The full validated claims.
    pub claims: AccessClaims,
}

impl From<AccessClaims> for RequestContext {
    fn from(claims: AccessClaims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username.clone(),
            email: claims.email.clone(),
            claims,
        }
    }
}
