//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use explorer_core::config::AppConfig;
use explorer_core::traits::EventReporter;
use explorer_fs::{ContentResolver, TreeBuilder};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Directory tree builder
    pub tree_builder: Arc<TreeBuilder>,
    /// File content resolver
    pub content_resolver: Arc<ContentResolver>,
}

impl AppState {
    /// Wires the tree builder and content resolver from configuration,
    /// both reporting absorbed failures to `reporter`.
    pub fn new(config: AppConfig, reporter: Arc<dyn EventReporter>) -> Self {
        let tree_builder = TreeBuilder::new(&config.explorer, Arc::clone(&reporter));

        let mut content_resolver = ContentResolver::new(reporter);
        if config.explorer.confine_to_roots {
            content_resolver = content_resolver.confined_to(&config.explorer.roots);
        }

        Self {
            config: Arc::new(config),
            tree_builder: Arc::new(tree_builder),
            content_resolver: Arc::new(content_resolver),
        }
    }
}
