//! Identity records and the directory they are resolved from.
//!
//! User persistence and password hashing live outside this crate. The
//! [`InMemoryUserDirectory`] is a development stand-in that stores the
//! seeded credential as given.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use knowledgehub_core::error::AppError;
use knowledgehub_core::result::AppResult;
use knowledgehub_core::types::UserId;

/// The profile embedded in an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
}

impl Identity {
    pub fn new(user_id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Resolves the current profile of a user by ID.
#[async_trait]
pub trait IdentitySource: Send + Sync {
    /// Returns `None` if the user is unknown.
    async fn find_identity(&self, user_id: UserId) -> AppResult<Option<Identity>>;
}

/// Account lookup used by the login and registration handlers.
#[async_trait]
pub trait UserDirectory: IdentitySource {
    /// Returns the identity when the credentials match.
    async fn verify_credentials(&self, username: &str, password: &str)
    -> AppResult<Option<Identity>>;

    /// Creates a new account. Fails with a conflict if the username is taken.
    async fn register(&self, username: &str, email: &str, password: &str) -> AppResult<Identity>;
}

#[derive(Debug, Clone)]
struct StoredUser {
    identity: Identity,
    password: String,
}

/// Development user directory held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<HashMap<UserId, StoredUser>>>,
    next_id: Arc<AtomicU64>,
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserDirectory {
    /// Creates an empty directory. IDs start at 1.
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Creates a directory seeded with `admin` / `password` as user 1.
    pub fn with_default_admin() -> Self {
        let admin = StoredUser {
            identity: Identity::new(UserId::new(1), "admin", "admin@example.com"),
            password: "password".to_string(),
        };

        let mut users = HashMap::new();
        users.insert(admin.identity.user_id, admin);

        Self {
            users: Arc::new(RwLock::new(users)),
            next_id: Arc::new(AtomicU64::new(2)),
        }
    }
}

#[async_trait]
impl IdentitySource for InMemoryUserDirectory {
    async fn find_identity(&self, user_id: UserId) -> AppResult<Option<Identity>> {
        let users = self.users.read().await;
        Ok(users.get(&user_id).map(|u| u.identity.clone()))
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> AppResult<Option<Identity>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.identity.username == username && u.password == password)
            .map(|u| u.identity.clone()))
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> AppResult<Identity> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.identity.username == username) {
            return Err(AppError::conflict("Username already exists"));
        }

        let user_id = UserId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let identity = Identity::new(user_id, username, email);
        users.insert(
            user_id,
            StoredUser {
                identity: identity.clone(),
                password: password.to_string(),
            },
        );

        tracing::debug!(user_id = %user_id, username = %username, "Registered user");
        Ok(identity)
    }
}
