//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod explorer;
pub mod logging;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::explorer::{ExplorerConfig, ListingOptions};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// files (default.toml + environment overlay + `EXPLORER__` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Listing and content settings.
    #[serde(default)]
    pub explorer: ExplorerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the `config/` directory.
    ///
    /// Merges `config/default.toml` with `config/{env}.toml` and environment
    /// variables prefixed with `EXPLORER__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from(Path::new("config"), env)
    }

    /// Load configuration from TOML files in `dir`.
    pub fn load_from(dir: &Path, env: &str) -> Result<Self, AppError> {
        let default_file = dir.join("default");
        let env_file = dir.join(env);
        let default_name = default_file.to_string_lossy();
        let env_name = env_file.to_string_lossy();

        let config = config::Config::builder()
            .add_source(config::File::with_name(&default_name).required(false))
            .add_source(config::File::with_name(&env_name).required(false))
            .add_source(
                config::Environment::with_prefix("EXPLORER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.explorer.listing.group_by_label {
            let mut seen = HashSet::new();
            for (index, root) in self.explorer.roots.iter().enumerate() {
                let name = root.display_name(index);
                if !seen.insert(name.clone()) {
                    return Err(AppError::configuration(format!(
                        "Duplicate root name '{name}' cannot be used with group_by_label"
                    )));
                }
            }
        }
        Ok(())
    }
}
