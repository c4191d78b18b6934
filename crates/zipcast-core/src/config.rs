use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;
use zipcast_weather::client::{
    DEFAULT_FORECAST_DAYS, DEFAULT_FORECAST_URL, DEFAULT_GEOCODING_URL, DEFAULT_USER_AGENT,
};
use zipcast_weather::ResolverOptions;

use crate::error::ConfigError;

/// Open-Meteo accepts at most 16 forecast days.
pub const MAX_FORECAST_DAYS: u8 = 16;

/// Longest accepted cache TTL (365 days).
pub const MAX_TTL_MINUTES: u64 = 365 * 24 * 60;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Outbound HTTP settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Response cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Upstream provider settings
    #[serde(default)]
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent sent to both providers (Nominatim requires one)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Minutes a response stays cached after it is written
    #[serde(default = "default_ttl_minutes")]
    pub ttl_minutes: u64,

    /// Maximum number of cached responses
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
}

fn default_ttl_minutes() -> u64 {
    30
}

fn default_max_entries() -> u64 {
    10_000
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: default_ttl_minutes(),
            max_entries: default_max_entries(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Number of forecast days requested from Open-Meteo
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,

    /// Nominatim search endpoint
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,

    /// Open-Meteo forecast endpoint
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
}

fn default_forecast_days() -> u8 {
    DEFAULT_FORECAST_DAYS
}

fn default_geocoding_url() -> String {
    DEFAULT_GEOCODING_URL.to_string()
}

fn default_forecast_url() -> String {
    DEFAULT_FORECAST_URL.to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            forecast_days: default_forecast_days(),
            geocoding_url: default_geocoding_url(),
            forecast_url: default_forecast_url(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save_to(&config_path)?;
            tracing::info!("Wrote default config to {}", config_path.display());
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Load configuration (from `path` if given) and validate it
    ///
    /// Warnings are logged; errors fail the load.
    pub fn load_validated(path: Option<&Path>) -> Result<(Self, ValidationResult)> {
        let config = match path {
            Some(p) => Self::load_from(p)?,
            None => Self::load()?,
        };
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.http.user_agent.trim().is_empty() {
            result.add_error("http.user_agent", "User agent must not be empty");
        }

        if self.http.timeout_secs == 0 {
            result.add_error("http.timeout_secs", "Timeout must be greater than 0");
        }

        if self.cache.ttl_minutes == 0 {
            result.add_error("cache.ttl_minutes", "TTL must be greater than 0");
        } else if self.cache.ttl_minutes > MAX_TTL_MINUTES {
            result.add_error(
                "cache.ttl_minutes",
                format!("TTL must be at most {} minutes (365 days)", MAX_TTL_MINUTES),
            );
        } else if self.cache.ttl_minutes > 1440 {
            result.add_warning("cache.ttl_minutes", "Cache TTL is more than 24 hours");
        }

        if self.cache.max_entries == 0 {
            result.add_error("cache.max_entries", "Cache must hold at least one entry");
        }

        if self.weather.forecast_days == 0 || self.weather.forecast_days > MAX_FORECAST_DAYS {
            result.add_error(
                "weather.forecast_days",
                format!("Forecast days must be between 1 and {}", MAX_FORECAST_DAYS),
            );
        }

        validate_url(&self.weather.geocoding_url, "weather.geocoding_url", &mut result);
        validate_url(&self.weather.forecast_url, "weather.forecast_url", &mut result);

        result
    }

    /// Options for building the weather resolver
    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            user_agent: self.http.user_agent.clone(),
            request_timeout: Duration::from_secs(self.http.timeout_secs),
            cache_ttl: Duration::from_secs(self.cache.ttl_minutes.saturating_mul(60)),
            cache_max_entries: self.cache.max_entries,
            forecast_days: self.weather.forecast_days,
            geocoding_url: self.weather.geocoding_url.clone(),
            forecast_url: self.weather.forecast_url.clone(),
        }
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        std::fs::write(path, self.to_toml()?).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the default configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("zipcast");

        Ok(config_dir.join("config.toml"))
    }
}

fn validate_url(url_str: &str, field_name: &str, result: &mut ValidationResult) {
    match Url::parse(url_str) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                result.add_error(
                    field_name,
                    format!("URL must use http or https scheme, got: {}", url.scheme()),
                );
            }

            if url.host().is_none() {
                result.add_error(field_name, "URL must have a host");
            }
        }
        Err(e) => {
            result.add_error(field_name, format!("Invalid URL: {}", e));
        }
    }
}
