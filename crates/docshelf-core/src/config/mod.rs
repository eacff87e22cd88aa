//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a serde default so that an empty
//! file yields a runnable development setup.

pub mod app;
pub mod logging;
pub mod query;
pub mod upload;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use self::app::{CorsConfig, ServerConfig};
pub use self::logging::LoggingConfig;
pub use self::query::QueryConfig;
pub use self::upload::UploadConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upload validation settings.
    #[serde(default)]
    pub upload: UploadConfig,
    /// List query defaults and bounds.
    #[serde(default)]
    pub query: QueryConfig,
    /// Acting-user settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Demo data seeding.
    #[serde(default)]
    pub seed: SeedConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Acting-user configuration.
///
/// DocShelf does not authenticate callers; requests may name an actor via
/// the `X-User-Id` header, otherwise this user is recorded as the actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// User recorded as uploader/creator when a request names none.
    #[serde(default = "default_user_id")]
    pub default_user_id: Uuid,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            default_user_id: default_user_id(),
        }
    }
}

/// Demo data seeding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Whether to load the demo tags and documents at startup.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default.toml` with an environment-specific overlay
    /// (`config/{env}.toml`) and environment variables prefixed with
    /// `DOCSHELF__` (e.g. `DOCSHELF__SERVER__PORT=9000`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("DOCSHELF")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn default_user_id() -> Uuid {
    Uuid::nil()
}

fn default_true() -> bool {
    true
}
