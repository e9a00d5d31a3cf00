//! Application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;

use knowledgehub_auth::identity::InMemoryUserDirectory;
use knowledgehub_auth::jwt::TokenService;
use knowledgehub_core::config::AppConfig;
use knowledgehub_core::error::AppError;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Builds application state from configuration.
///
/// Users come from the in-memory development directory seeded with the
/// default admin account.
pub fn build_state(config: &AppConfig) -> Result<AppState, AppError> {
    let tokens = TokenService::new(config.jwt.clone())?;
    let users = Arc::new(InMemoryUserDirectory::with_default_admin());

    Ok(AppState::new(tokens, users))
}

/// Runs the KnowledgeHub server until Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting KnowledgeHub server...");

    let addr = config.server.bind_address();
    tracing::info!(
        algorithm = %config.jwt.signing_algorithm,
        access_ttl_seconds = config.jwt.access_token_ttl_seconds,
        refresh_ttl_seconds = config.jwt.refresh_token_ttl_seconds,
        "Initializing token service"
    );
    let app = build_app(build_state(&config)?);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("KnowledgeHub server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("KnowledgeHub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
