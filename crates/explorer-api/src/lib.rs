//! # explorer-api
//!
//! HTTP API layer for the directory explorer built on Axum.
//!
//! Provides the listing/content endpoint, the explorer page, a health
//! probe, middleware (logging, CORS, compression, timeout) and error
//! mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
