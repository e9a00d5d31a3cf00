//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use knowledgehub_auth::identity::UserDirectory;
use knowledgehub_auth::jwt::TokenService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Token issuance and validation
    pub tokens: Arc<TokenService>,
    /// User accounts backing login, registration, and refresh
    pub users: Arc<dyn UserDirectory>,
}

impl AppState {
    /// Creates the state from its parts.
    pub fn new(tokens: TokenService, users: Arc<dyn UserDirectory>) -> Self {
        Self {
            tokens: Arc::new(tokens),
            users,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}
