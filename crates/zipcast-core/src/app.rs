use std::path::Path;
use std::sync::Arc;

use zipcast_weather::{LocationRequest, Resolved, WeatherResolver};

use crate::{AppError, Config, ConfigError};

/// Application state: validated configuration and the shared resolver.
#[derive(Debug, Clone)]
pub struct App {
    config: Arc<Config>,
    resolver: Arc<WeatherResolver>,
}

impl App {
    /// Load and validate configuration, then build the resolver.
    pub fn new(config_path: Option<&Path>) -> Result<Self, AppError> {
        let (config, _) = Config::load_validated(config_path)?;
        Self::from_config(config)
    }

    /// Build from an in-memory configuration. Invalid settings are rejected
    /// before any resolver state is created.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let validation = config.validate();
        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        let options = config.resolver_options();
        let resolver = WeatherResolver::from_options(&options)?;
        tracing::info!(
            "Resolver ready: ttl={:?}, max_entries={}, forecast_days={}",
            options.cache_ttl,
            options.cache_max_entries,
            options.forecast_days
        );

        Ok(Self {
            config: Arc::new(config),
            resolver: Arc::new(resolver),
        })
    }

    /// Validate raw input and resolve the weather for it.
    pub async fn lookup(&self, zip: &str, country: &str) -> Result<Resolved, AppError> {
        let request = LocationRequest::new(zip, country)?;
        Ok(self.resolver.resolve(&request).await?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn resolver(&self) -> &WeatherResolver {
        &self.resolver
    }
}
