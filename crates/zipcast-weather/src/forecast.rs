//! Open-Meteo forecast client: current temperature plus daily min/max.

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{UpstreamError, WeatherError};
use crate::types::Coordinates;

/// Raw Open-Meteo forecast payload. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenMeteoForecast {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    pub current: Option<CurrentConditions>,
    pub daily: Option<DailySeries>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentConditions {
    pub time: Option<String>,
    pub temperature_2m: Option<f64>,
}

/// Parallel daily arrays. Upstream does not guarantee equal lengths.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailySeries {
    pub time: Option<Vec<String>>,
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
}

/// Fetches forecasts for resolved coordinates.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    forecast_url: String,
    forecast_days: u8,
}

impl ForecastClient {
    pub fn new(client: Client, forecast_url: impl Into<String>, forecast_days: u8) -> Self {
        Self {
            client,
            forecast_url: forecast_url.into(),
            forecast_days,
        }
    }

    /// Fetch current conditions and `forecast_days` days of min/max.
    ///
    /// A payload without a `current` section is an error; short or missing
    /// daily arrays are not.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, coords: Coordinates) -> Result<OpenMeteoForecast, WeatherError> {
        let response = self
            .client
            .get(&self.forecast_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("current", "temperature_2m".to_string()),
                ("daily", "temperature_2m_max,temperature_2m_min".to_string()),
                ("forecast_days", self.forecast_days.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Forecast returned status {}", status);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let payload: Option<OpenMeteoForecast> = response.json().await?;
        check_payload(payload, coords).map_err(Into::into)
    }
}

fn check_payload(
    payload: Option<OpenMeteoForecast>,
    coords: Coordinates,
) -> Result<OpenMeteoForecast, UpstreamError> {
    let forecast = payload.ok_or_else(|| UpstreamError::EmptyPayload(coords.to_string()))?;
    if forecast.current.is_none() {
        return Err(UpstreamError::MissingCurrent(coords.to_string()));
    }
    Ok(forecast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const COORDS: Coordinates = Coordinates {
        latitude: 52.52,
        longitude: 13.41,
    };

    #[test]
    fn test_null_payload_is_empty() {
        let err = check_payload(None, COORDS).unwrap_err();
        assert!(matches!(err, UpstreamError::EmptyPayload(_)));
    }

    #[test]
    fn test_missing_current_is_error() {
        let payload: OpenMeteoForecast = serde_json::from_value(serde_json::json!({
            "latitude": 52.52,
            "longitude": 13.41,
            "daily": {"time": ["2026-10-19"]}
        }))
        .unwrap();
        let err = check_payload(Some(payload), COORDS).unwrap_err();
        assert!(matches!(err, UpstreamError::MissingCurrent(_)));
    }

    #[test]
    fn test_empty_daily_is_not_error() {
        let payload: OpenMeteoForecast = serde_json::from_value(serde_json::json!({
            "latitude": 52.52,
            "longitude": 13.41,
            "current": {"time": "2026-10-19T10:00", "temperature_2m": null},
            "daily": {"time": [], "temperature_2m_max": [], "temperature_2m_min": []}
        }))
        .unwrap();
        assert!(check_payload(Some(payload), COORDS).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_sends_forecast_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "52.52"))
            .and(query_param("longitude", "13.41"))
            .and(query_param("current", "temperature_2m"))
            .and(query_param("daily", "temperature_2m_max,temperature_2m_min"))
            .and(query_param("forecast_days", "3"))
            .and(query_param("timezone", "auto"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "latitude": 52.52,
                "longitude": 13.419998,
                "generationtime_ms": 0.05,
                "current": {"time": "2026-10-19T10:00", "interval": 900, "temperature_2m": 11.3},
                "daily": {
                    "time": ["2026-10-19", "2026-10-20", "2026-10-21"],
                    "temperature_2m_max": [14.1, 15.0, null],
                    "temperature_2m_min": [6.2, 7.4]
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ForecastClient::new(
            Client::new(),
            format!("{}/v1/forecast", mock_server.uri()),
            3,
        );
        let forecast = client.fetch(COORDS).await.unwrap();

        let current = forecast.current.unwrap();
        assert_eq!(current.temperature_2m, Some(11.3));
        let daily = forecast.daily.unwrap();
        assert_eq!(daily.time.unwrap().len(), 3);
        assert_eq!(daily.temperature_2m_max.unwrap()[2], None);
        assert_eq!(daily.temperature_2m_min.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_null_body_is_upstream_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_string("null"),
            )
            .mount(&mock_server)
            .await;

        let client = ForecastClient::new(
            Client::new(),
            format!("{}/v1/forecast", mock_server.uri()),
            7,
        );
        let err = client.fetch(COORDS).await.unwrap_err();
        assert!(matches!(
            err,
            WeatherError::Upstream(UpstreamError::EmptyPayload(_))
        ));
    }
}
