//! Error taxonomy for weather resolution.
//!
//! - [`ResolutionError`]: the geocoder could not turn a postal code into coordinates
//! - [`UpstreamError`]: a provider call failed, timed out, or returned an unusable payload
//!
//! Both abort the resolution in flight and are surfaced unchanged to the caller.

use thiserror::Error;

/// Postal code could not be resolved to coordinates.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Could not resolve coordinates for zip '{zip}' in country '{country}'")]
    NoMatch { zip: String, country: String },

    #[error("Geocoding returned no lat/lon for zip '{zip}' in country '{country}'")]
    MissingCoordinates { zip: String, country: String },

    #[error("Invalid '{field}' value from geocoding provider for zip '{zip}' in country '{country}': {raw}")]
    InvalidCoordinate {
        zip: String,
        country: String,
        field: &'static str,
        raw: String,
    },
}

impl ResolutionError {
    /// The (zip, country) pair that failed to resolve.
    pub fn location(&self) -> (&str, &str) {
        match self {
            Self::NoMatch { zip, country }
            | Self::MissingCoordinates { zip, country }
            | Self::InvalidCoordinate { zip, country, .. } => (zip.as_str(), country.as_str()),
        }
    }
}

/// A provider call failed or returned an unusable payload.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Forecast provider returned no payload for coordinates {0}")]
    EmptyPayload(String),

    #[error("Forecast provider returned no current conditions for coordinates {0}")]
    MissingCurrent(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Provider error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            UpstreamError::Timeout
        } else if e.is_decode() {
            UpstreamError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            UpstreamError::Status {
                status: status.as_u16(),
                body: e.to_string(),
            }
        } else {
            UpstreamError::Connection(e.to_string())
        }
    }
}

/// Weather resolution errors
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Resolution error: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),
}

impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> Self {
        WeatherError::Upstream(e.into())
    }
}

impl WeatherError {
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution(_))
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Resolution(_) => "Location not found. Check the postal code and country.",
            Self::Upstream(UpstreamError::Timeout) => {
                "The weather service timed out. Please try again."
            }
            Self::Upstream(UpstreamError::Connection(_)) => {
                "Unable to reach the weather service. Check your internet connection."
            }
            Self::Upstream(_) => "Weather service error. Please try again later.",
        }
    }
}
