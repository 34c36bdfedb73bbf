//! Request timeout answered with the standard JSON error body.

use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::{BoxError, Router};
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower::timeout::error::Elapsed;

use explorer_core::error::AppError;

use crate::error::ApiError;

/// Message carried by a timed-out response.
pub const REQUEST_TIMED_OUT: &str = "Request timed out";

/// Fails requests that run longer than `timeout` with a 408 and
/// `{"error": "Request timed out"}`. Dropping the in-flight handler cancels
/// any traversal it was running.
pub fn with_timeout<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_timeout_error))
            .layer(TimeoutLayer::new(timeout)),
    )
}

async fn handle_timeout_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        AppError::timeout(REQUEST_TIMED_OUT).into()
    } else {
        AppError::internal(format!("Unhandled middleware error: {err}")).into()
    }
}
