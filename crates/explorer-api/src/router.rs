//! Route definitions for the explorer HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor. The explorer page is served straight from the static
//! directory.

use std::path::Path;
use std::time::Duration;

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::services::ServeFile;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// File name of the explorer page inside the static directory.
pub const EXPLORER_PAGE: &str = "file-explorer.html";

/// Build the Axum router with all routes and per-request middleware.
pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);
    let page = Path::new(&state.config.server.static_dir).join(EXPLORER_PAGE);

    let routes = Router::new()
        .merge(file_routes())
        .merge(health_routes())
        .route_service("/explorer", ServeFile::new(&page))
        .route_service("/", ServeFile::new(&page));

    middleware::timeout::with_timeout(routes, timeout)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Listing and content endpoint
fn file_routes() -> Router<AppState> {
    Router::new().route("/files", get(handlers::files::files))
}

/// Liveness probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
