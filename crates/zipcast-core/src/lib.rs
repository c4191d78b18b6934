//! Zipcast application shell: configuration, logging, errors and app wiring.

pub mod app;
pub mod config;
pub mod error;

pub use app::App;
pub use config::{CacheConfig, Config, HttpConfig, ValidationResult, WeatherConfig};
pub use error::{AppError, ConfigError};

use anyhow::Result;

/// Initialize logging. Output goes to stderr so stdout stays machine-readable.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("Zipcast core initialized");
    Ok(())
}
