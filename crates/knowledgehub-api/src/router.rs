//! Route definitions for the KnowledgeHub HTTP API.
//!
//! API routes are mounted under `/v1`; the health probe sits at the root.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(public_auth_routes())
        .merge(protected_auth_routes(state.clone()))
        .merge(translation_routes(state.clone()));

    Router::new()
        .route("/healthz", get(handlers::health::health))
        .nest("/v1", api_routes)
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Token issuance endpoints: login, register, refresh
fn public_auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/refresh", post(handlers::auth::refresh))
}

/// Endpoints behind the mandatory gate
fn protected_auth_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::require_auth,
        ))
}

/// Endpoints behind the optional gate
fn translation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/translation/history", get(handlers::translation::history))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::optional_auth,
        ))
}
