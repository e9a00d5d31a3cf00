//! # knowledgehub-core
//!
//! Core crate for KnowledgeHub. Contains configuration schemas, the typed
//! user identifier, and the unified error system.
//!
//! This crate has **no** internal dependencies on other KnowledgeHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
