//! Turns a raw forecast payload into the response shape served to callers.

use crate::forecast::OpenMeteoForecast;
use crate::request::LocationRequest;
use crate::types::{Coordinates, DailyForecast, WeatherResponse};

/// Assemble a response. Pure; never fails.
///
/// `daily.time` drives the iteration. Min/max arrays may be shorter, and a
/// missing index yields `None` for that day.
pub fn build(
    forecast: &OpenMeteoForecast,
    request: &LocationRequest,
    coords: Coordinates,
    from_cache: bool,
) -> WeatherResponse {
    let current = forecast
        .current
        .as_ref()
        .and_then(|c| c.temperature_2m);

    let days = daily_items(forecast);
    let (today_min_c, today_max_c) = days
        .first()
        .map(|d| (d.min_c, d.max_c))
        .unwrap_or((None, None));

    WeatherResponse {
        zip: request.zip().to_string(),
        country: request.country().to_string(),
        latitude: coords.latitude,
        longitude: coords.longitude,
        from_cache,
        current_temperature_c: current,
        today_min_c,
        today_max_c,
        forecast: days,
    }
}

fn daily_items(forecast: &OpenMeteoForecast) -> Vec<DailyForecast> {
    let Some(daily) = &forecast.daily else {
        return Vec::new();
    };
    let Some(dates) = &daily.time else {
        return Vec::new();
    };

    let at = |series: &Option<Vec<Option<f64>>>, i: usize| {
        series.as_ref().and_then(|s| s.get(i).copied().flatten())
    };

    dates
        .iter()
        .enumerate()
        .map(|(i, date)| DailyForecast {
            date: date.clone(),
            min_c: at(&daily.temperature_2m_min, i),
            max_c: at(&daily.temperature_2m_max, i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> LocationRequest {
        LocationRequest::new("10115", "DE").unwrap()
    }

    const COORDS: Coordinates = Coordinates {
        latitude: 52.53,
        longitude: 13.38,
    };

    fn payload(json: serde_json::Value) -> OpenMeteoForecast {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_ragged_daily_arrays() {
        let forecast = payload(serde_json::json!({
            "latitude": 52.52,
            "longitude": 13.41,
            "current": {"time": "2026-10-19T10:00", "temperature_2m": 11.3},
            "daily": {
                "time": ["2026-10-19", "2026-10-20", "2026-10-21", "2026-10-22", "2026-10-23"],
                "temperature_2m_min": [5.0, 6.0, 7.0],
                "temperature_2m_max": [15.0, 16.0, 17.0, 18.0, 19.0]
            }
        }));

        let resp = build(&forecast, &request(), COORDS, false);

        assert_eq!(resp.forecast.len(), 5);
        for day in &resp.forecast[3..] {
            assert_eq!(day.min_c, None);
            assert!(day.max_c.is_some());
        }
        assert_eq!(resp.forecast[4].max_c, Some(19.0));
        assert_eq!(resp.today_min_c, Some(5.0));
        assert_eq!(resp.today_max_c, Some(15.0));
        assert_eq!(resp.current_temperature_c, Some(11.3));
    }

    #[test]
    fn test_order_preserved() {
        let forecast = payload(serde_json::json!({
            "current": {"temperature_2m": 1.0},
            "daily": {"time": ["2026-10-21", "2026-10-19", "2026-10-20"]}
        }));

        let resp = build(&forecast, &request(), COORDS, false);
        let dates: Vec<_> = resp.forecast.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, ["2026-10-21", "2026-10-19", "2026-10-20"]);
    }

    #[test]
    fn test_null_values_are_absent() {
        let forecast = payload(serde_json::json!({
            "current": {"time": "2026-10-19T10:00", "temperature_2m": null},
            "daily": {
                "time": ["2026-10-19"],
                "temperature_2m_min": [null],
                "temperature_2m_max": [12.0]
            }
        }));

        let resp = build(&forecast, &request(), COORDS, true);
        assert_eq!(resp.current_temperature_c, None);
        assert_eq!(resp.today_min_c, None);
        assert_eq!(resp.today_max_c, Some(12.0));
        assert!(resp.from_cache);
    }

    #[test]
    fn test_missing_daily_section() {
        let forecast = payload(serde_json::json!({
            "current": {"temperature_2m": 3.5}
        }));

        let resp = build(&forecast, &request(), COORDS, false);
        assert!(resp.forecast.is_empty());
        assert_eq!(resp.today_min_c, None);
        assert_eq!(resp.today_max_c, None);
    }

    #[test]
    fn test_identity_and_coordinates_copied() {
        let forecast = payload(serde_json::json!({"current": {}}));
        let resp = build(&forecast, &request(), COORDS, false);
        assert_eq!(resp.zip, "10115");
        assert_eq!(resp.country, "DE");
        assert_eq!(resp.latitude, COORDS.latitude);
        assert_eq!(resp.longitude, COORDS.longitude);
    }
}
