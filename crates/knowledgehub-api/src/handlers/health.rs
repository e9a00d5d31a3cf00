//! Health check handlers.

use axum::Json;

use crate::dto::response::HealthResponse;

/// GET /healthz
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
