//! Weather lookup by postal code for Zipcast
//!
//! Resolves a postal code to coordinates via Nominatim, fetches current and
//! daily temperatures from Open-Meteo, and memoizes the combined response in
//! a bounded, write-time-expiring in-memory cache.

pub mod assemble;
pub mod cache;
pub mod client;
pub mod error;
pub mod forecast;
pub mod geocode;
pub mod request;
pub mod resolver;
pub mod types;

pub use cache::CacheStore;
pub use client::ResolverOptions;
pub use error::{ResolutionError, UpstreamError, WeatherError};
pub use forecast::ForecastClient;
pub use geocode::GeocodingClient;
pub use request::{CacheKey, LocationRequest, ValidationError};
pub use resolver::WeatherResolver;
pub use types::*;
