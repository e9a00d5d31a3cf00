//! Convenience result type alias for KnowledgeHub.

use crate::error::AppError;

/// A specialized `Result` type for KnowledgeHub operations.
pub type AppResult<T> = Result<T, AppError>;
