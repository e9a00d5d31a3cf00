//! Custom Axum extractors.

pub mod auth;
pub mod client;
pub mod json;

pub use auth::{AuthUser, MaybeAuthUser};
pub use client::ClientAddr;
pub use json::ValidatedJson;
