//! # knowledgehub-api
//!
//! HTTP API layer for KnowledgeHub built on Axum.
//!
//! Provides the authentication gate (mandatory and optional), the auth
//! endpoints that issue and rotate tokens, extractors, DTOs, and error
//! mapping.

pub mod app;
pub mod context;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use context::RequestContext;
pub use error::ApiError;
pub use state::AppState;
