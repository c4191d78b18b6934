//! Cache-aside resolution: cache lookup, then geocode → forecast → assemble → store.

use tracing::instrument;

use crate::assemble;
use crate::cache::CacheStore;
use crate::client::{build_http_client, ResolverOptions};
use crate::error::WeatherError;
use crate::forecast::ForecastClient;
use crate::geocode::GeocodingClient;
use crate::request::LocationRequest;
use crate::types::Resolved;

/// Resolves location requests to weather responses, memoizing results.
///
/// Concurrent misses for the same key are not collapsed: each performs the
/// full fetch and the last write wins.
#[derive(Debug, Clone)]
pub struct WeatherResolver {
    geocoder: GeocodingClient,
    forecaster: ForecastClient,
    cache: CacheStore,
}

impl WeatherResolver {
    pub fn new(geocoder: GeocodingClient, forecaster: ForecastClient, cache: CacheStore) -> Self {
        Self {
            geocoder,
            forecaster,
            cache,
        }
    }

    /// Build both clients over one shared HTTP client, plus a fresh cache.
    pub fn from_options(options: &ResolverOptions) -> Result<Self, WeatherError> {
        let http = build_http_client(options)?;
        Ok(Self::new(
            GeocodingClient::new(http.clone(), options.geocoding_url.as_str()),
            ForecastClient::new(http, options.forecast_url.as_str(), options.forecast_days),
            CacheStore::new(options.cache_max_entries, options.cache_ttl),
        ))
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Resolve the weather for a request.
    ///
    /// On a hit the stored response is returned with `from_cache` set; the
    /// stored entry itself is not modified. On a miss the response is
    /// computed, stored, and returned with `from_cache` cleared. Any upstream
    /// failure is returned as-is and nothing is written to the cache.
    #[instrument(skip(self, request), fields(request = %request), level = "debug")]
    pub async fn resolve(&self, request: &LocationRequest) -> Result<Resolved, WeatherError> {
        let key = request.cache_key();

        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!("Cache hit for {}", key);
            return Ok(Resolved {
                response: cached.with_from_cache(true),
                from_cache: true,
            });
        }
        tracing::debug!("Cache miss for {}", key);

        let coords = self
            .geocoder
            .resolve(request.zip(), request.country())
            .await
            .inspect_err(|e| tracing::warn!("Geocoding failed for {}: {}", key, e))?;

        let forecast = self
            .forecaster
            .fetch(coords)
            .await
            .inspect_err(|e| tracing::warn!("Forecast failed for {}: {}", key, e))?;

        let response = assemble::build(&forecast, request, coords, false);
        self.cache.put(key.clone(), response.clone());
        tracing::info!("Resolved weather for {} at {}", key, coords);

        Ok(Resolved {
            response,
            from_cache: false,
        })
    }
}
