//! DocShelf server: document management API.
//!
//! Main entry point that loads configuration, initialises logging and
//! starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use docshelf_core::config::AppConfig;
use docshelf_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and `DOCSHELF__*` environment variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("DOCSHELF_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        seed = config.seed.enabled,
        max_upload = %docshelf_core::format::format_file_size(config.upload.max_file_size_bytes),
        "Starting DocShelf"
    );
    docshelf_api::run_server(config).await
}
