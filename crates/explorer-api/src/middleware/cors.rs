//! CORS layer for the read-only explorer surface.

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use explorer_core::config::CorsConfig;

/// Every route is a read, so only these methods are ever allowed.
pub const ALLOWED_METHODS: [Method; 3] = [Method::GET, Method::HEAD, Method::OPTIONS];

/// Builds a CORS tower layer from configuration.
///
/// A `"*"` entry allows any origin (or header); otherwise unparsable
/// entries are skipped with a warning.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .max_age(Duration::from_secs(config.max_age_seconds));

    let layer = if is_wildcard(&config.allowed_origins) {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(parse_values(&config.allowed_origins, "origin"))
    };

    if is_wildcard(&config.allowed_headers) {
        layer.allow_headers(Any)
    } else {
        layer.allow_headers(
            config
                .allowed_headers
                .iter()
                .filter_map(|h| h.parse().ok())
                .collect::<Vec<axum::http::HeaderName>>(),
        )
    }
}

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == "*")
}

fn parse_values(values: &[String], what: &str) -> Vec<HeaderValue> {
    values
        .iter()
        .filter_map(|v| match v.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(value = %v, "Ignoring invalid CORS {}", what);
                None
            }
        })
        .collect()
}
