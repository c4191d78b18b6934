use serde::{Deserialize, Serialize};

/// Geographic coordinates resolved from a postal code
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Daily forecast entry. Either bound may be missing when upstream omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub date: String,
    pub min_c: Option<f64>,
    pub max_c: Option<f64>,
}

/// The cached unit of value: request identity, coordinates and temperatures.
///
/// `from_cache` describes how this copy was served, not what is stored; it is
/// excluded from [`WeatherResponse::same_contents`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResponse {
    pub zip: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub from_cache: bool,
    pub current_temperature_c: Option<f64>,
    pub today_min_c: Option<f64>,
    pub today_max_c: Option<f64>,
    pub forecast: Vec<DailyForecast>,
}

impl WeatherResponse {
    /// Copy of this response with the freshness flag replaced.
    #[must_use]
    pub fn with_from_cache(&self, from_cache: bool) -> Self {
        Self {
            from_cache,
            ..self.clone()
        }
    }

    /// Equality ignoring the freshness flag.
    pub fn same_contents(&self, other: &Self) -> bool {
        self.with_from_cache(false) == other.with_from_cache(false)
    }
}

/// Outcome of a resolution handed back to the boundary layer
#[derive(Debug, Clone)]
pub struct Resolved {
    pub response: WeatherResponse,
    pub from_cache: bool,
}

impl Resolved {
    /// Value for an `X-Cache` style marker.
    pub fn cache_status(&self) -> &'static str {
        if self.from_cache {
            "HIT"
        } else {
            "MISS"
        }
    }
}
