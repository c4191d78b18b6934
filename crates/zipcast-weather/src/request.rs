//! Normalized location requests and the cache keys derived from them.

use thiserror::Error;

/// Input rejected before it reaches the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("zip must not be blank")]
    EmptyZip,

    #[error("country must be ISO-3166 alpha-2 (e.g. BR, US), got '{0}'")]
    InvalidCountry(String),
}

/// A postal code and ISO alpha-2 country, trimmed and case-normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRequest {
    zip: String,
    country: String,
}

impl LocationRequest {
    /// Normalize and validate a raw (zip, country) pair.
    pub fn new(zip: &str, country: &str) -> Result<Self, ValidationError> {
        let zip = zip.trim();
        if zip.is_empty() {
            return Err(ValidationError::EmptyZip);
        }

        let country = country.trim();
        if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCountry(country.to_string()));
        }

        Ok(Self {
            zip: zip.to_string(),
            country: country.to_ascii_uppercase(),
        })
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn cache_key(&self) -> CacheKey {
        CacheKey::new(&self.zip, &self.country)
    }
}

impl std::fmt::Display for LocationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.country, self.zip)
    }
}

/// Cache key of the form `COUNTRY:zip`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive a key, trimming both parts and uppercasing the country so that
    /// equivalent requests land on the same entry.
    pub fn new(zip: &str, country: &str) -> Self {
        Self(format!(
            "{}:{}",
            country.trim().to_ascii_uppercase(),
            zip.trim()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_normalizes_whitespace_and_case() {
        let req = LocationRequest::new("  01310-100 ", " br ").unwrap();
        assert_eq!(req.zip(), "01310-100");
        assert_eq!(req.country(), "BR");
    }

    #[test]
    fn test_equivalent_requests_share_a_key() {
        let a = LocationRequest::new("10001", "US").unwrap();
        let b = LocationRequest::new(" 10001\t", "us ").unwrap();
        assert_eq!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key().as_str(), "US:10001");
    }

    #[test]
    fn test_key_normalizes_raw_input() {
        assert_eq!(CacheKey::new(" 10001 ", "us"), CacheKey::new("10001", "US"));
    }

    #[test]
    fn test_distinct_countries_get_distinct_keys() {
        assert_ne!(CacheKey::new("10001", "US"), CacheKey::new("10001", "DE"));
    }

    #[test]
    fn test_blank_zip_rejected() {
        assert_eq!(LocationRequest::new("   ", "US"), Err(ValidationError::EmptyZip));
    }

    #[test]
    fn test_bad_country_rejected() {
        for country in ["USA", "U", "1A", "", "ü1"] {
            assert!(
                matches!(
                    LocationRequest::new("10001", country),
                    Err(ValidationError::InvalidCountry(_))
                ),
                "{country:?} should be rejected"
            );
        }
    }
}
