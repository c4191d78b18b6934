//! Forward geocoding: convert a postal code to coordinates.
//! Uses Nominatim (OpenStreetMap) search - free, no API key required.

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{ResolutionError, UpstreamError, WeatherError};
use crate::types::Coordinates;

#[derive(Debug, Deserialize)]
struct NominatimSearchResult {
    lat: Option<String>,
    lon: Option<String>,
    display_name: Option<String>,
}

/// Resolves (postal code, country) pairs through a Nominatim search endpoint.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    search_url: String,
}

impl GeocodingClient {
    pub fn new(client: Client, search_url: impl Into<String>) -> Self {
        Self {
            client,
            search_url: search_url.into(),
        }
    }

    /// Resolve a postal code to coordinates, taking the first match as-is.
    ///
    /// Issues exactly one request and never retries.
    #[instrument(skip(self), level = "info")]
    pub async fn resolve(&self, zip: &str, country: &str) -> Result<Coordinates, WeatherError> {
        let country_code = country.to_ascii_lowercase();
        let response = self
            .client
            .get(&self.search_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[
                ("format", "jsonv2"),
                ("limit", "1"),
                ("addressdetails", "0"),
                ("postalcode", zip),
                ("countrycodes", country_code.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Geocoding returned status {}", status);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let results: Vec<NominatimSearchResult> = response.json().await?;
        let coords = first_coordinates(results, zip, country)?;
        tracing::debug!("Resolved {} {} to {}", country, zip, coords);
        Ok(coords)
    }
}

fn first_coordinates(
    results: Vec<NominatimSearchResult>,
    zip: &str,
    country: &str,
) -> Result<Coordinates, ResolutionError> {
    let Some(first) = results.into_iter().next() else {
        return Err(ResolutionError::NoMatch {
            zip: zip.to_string(),
            country: country.to_string(),
        });
    };

    if let Some(name) = &first.display_name {
        tracing::debug!("Geocoding matched: {}", name);
    }

    let (Some(lat), Some(lon)) = (first.lat, first.lon) else {
        return Err(ResolutionError::MissingCoordinates {
            zip: zip.to_string(),
            country: country.to_string(),
        });
    };

    Ok(Coordinates {
        latitude: parse_coordinate(&lat, "latitude", zip, country)?,
        longitude: parse_coordinate(&lon, "longitude", zip, country)?,
    })
}

fn parse_coordinate(
    raw: &str,
    field: &'static str,
    zip: &str,
    country: &str,
) -> Result<f64, ResolutionError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ResolutionError::InvalidCoordinate {
            zip: zip.to_string(),
            country: country.to_string(),
            field,
            raw: raw.to_string(),
        })
}
