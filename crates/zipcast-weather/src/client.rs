//! Outbound transport settings shared by the geocoding and forecast clients.

use std::time::Duration;

use reqwest::Client;

use crate::cache::{DEFAULT_MAX_ENTRIES, DEFAULT_TTL};
use crate::error::WeatherError;

pub const DEFAULT_GEOCODING_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_USER_AGENT: &str = "Zipcast/0.1.0 (https://github.com/zipcast)";
pub const DEFAULT_FORECAST_DAYS: u8 = 7;
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Everything needed to build a [`crate::WeatherResolver`].
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// Sent as the User-Agent header; Nominatim rejects anonymous clients.
    pub user_agent: String,
    /// Upper bound for each outbound call.
    pub request_timeout: Duration,
    /// Time-to-live of a cached response, measured from write time.
    pub cache_ttl: Duration,
    pub cache_max_entries: u64,
    /// Passed verbatim as Open-Meteo's `forecast_days`.
    pub forecast_days: u8,
    pub geocoding_url: String,
    pub forecast_url: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            cache_ttl: DEFAULT_TTL,
            cache_max_entries: DEFAULT_MAX_ENTRIES,
            forecast_days: DEFAULT_FORECAST_DAYS,
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
        }
    }
}

/// Build the HTTP client shared by both upstream clients.
pub fn build_http_client(options: &ResolverOptions) -> Result<Client, WeatherError> {
    let client = Client::builder()
        .timeout(options.request_timeout)
        .user_agent(options.user_agent.as_str())
        .build()?;
    Ok(client)
}
