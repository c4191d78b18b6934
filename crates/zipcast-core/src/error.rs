//! Centralized error types for the Zipcast application.
//!
//! This module provides a typed error hierarchy that:
//! - Wraps the weather crate's resolution/upstream taxonomy unchanged
//! - Provides user-friendly messages suitable for terminal output
//! - Maps each failure kind to a process exit code

use thiserror::Error;
use zipcast_weather::{ValidationError, WeatherError};

/// Top-level application error type.
///
/// Use `user_message()` for display and `exit_code()` for the process status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast::<ConfigError>() {
            Ok(config) => AppError::Config(config),
            Err(e) => AppError::Other(e),
        }
    }
}

impl AppError {
    /// Returns a user-friendly message.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Validation(ValidationError::EmptyZip) => "A postal code is required.",
            AppError::Validation(ValidationError::InvalidCountry(_)) => {
                "Country must be a two-letter ISO code (e.g. BR, US)."
            }
            AppError::Weather(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) => 2,
            AppError::Weather(e) if e.is_resolution() => 3,
            AppError::Weather(_) => 4,
            AppError::Config(_) => 5,
            AppError::Io(_) | AppError::Other(_) => 1,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Configuration file not found. Check the --config path.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zipcast_weather::{ResolutionError, UpstreamError};

    #[test]
    fn test_exit_codes_by_kind() {
        let validation: AppError = ValidationError::EmptyZip.into();
        assert_eq!(validation.exit_code(), 2);

        let resolution: AppError = WeatherError::from(ResolutionError::NoMatch {
            zip: "1".into(),
            country: "US".into(),
        })
        .into();
        assert_eq!(resolution.exit_code(), 3);

        let upstream: AppError = WeatherError::from(UpstreamError::Timeout).into();
        assert_eq!(upstream.exit_code(), 4);

        let config: AppError = ConfigError::Invalid("x".into()).into();
        assert_eq!(config.exit_code(), 5);
    }

    #[test]
    fn test_anyhow_config_error_is_recovered() {
        let err = anyhow::Error::from(ConfigError::NotFound("/tmp/x.toml".into()));
        let app_err: AppError = err.into();
        assert!(matches!(app_err, AppError::Config(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_user_message_propagation() {
        let app_err = AppError::Weather(UpstreamError::Timeout.into());
        assert_eq!(
            app_err.user_message(),
            "The weather service timed out. Please try again."
        );
    }

    #[test]
    fn test_user_messages_are_non_empty() {
        let errors = vec![
            AppError::Validation(ValidationError::InvalidCountry("USA".into())),
            AppError::Config(ConfigError::ParseError("x".into())),
            AppError::Other(anyhow::anyhow!("boom")),
        ];
        for err in errors {
            assert!(!err.user_message().is_empty());
        }
    }
}
