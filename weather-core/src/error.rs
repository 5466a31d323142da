//! Errors surfaced by the location and weather lookups.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("No location found")]
    NoLocationFound,

    #[error("Failed to get city name from coordinates")]
    GeocodeRequestFailed(#[source] reqwest::Error),

    /// Either the request failed or the provider answered with a non-success status.
    #[error("Failed to get location from IP")]
    IpLocationFailed { reason: String },

    #[error("Failed to determine location")]
    LocationUnavailable {
        #[source]
        source: Box<WeatherError>,
    },

    #[error("Failed to search cities")]
    CitySearchFailed(#[source] reqwest::Error),

    /// Carries the upstream `message` when the provider sent one.
    #[error("{message}")]
    WeatherFetchFailed { message: String },
}

impl WeatherError {
    pub(crate) const GENERIC_FETCH_MESSAGE: &'static str = "Failed to fetch weather data";

    pub(crate) fn fetch_failed(message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| Self::GENERIC_FETCH_MESSAGE.to_string());
        Self::WeatherFetchFailed { message }
    }

    /// Localizer key of the message shown to the user for this error.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::NoLocationFound
            | Self::GeocodeRequestFailed(_)
            | Self::IpLocationFailed { .. }
            | Self::LocationUnavailable { .. } => "location_error",
            Self::CitySearchFailed(_) => "search_error",
            Self::WeatherFetchFailed { .. } => "weather_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failed_prefers_upstream_message() {
        let err = WeatherError::fetch_failed(Some("city not found".into()));
        assert_eq!(err.to_string(), "city not found");
    }

    #[test]
    fn fetch_failed_falls_back_to_generic_message() {
        assert_eq!(WeatherError::fetch_failed(None).to_string(), "Failed to fetch weather data");
        assert_eq!(
            WeatherError::fetch_failed(Some(String::new())).to_string(),
            "Failed to fetch weather data"
        );
    }

    #[test]
    fn location_unavailable_keeps_fallback_error_as_source() {
        let err = WeatherError::LocationUnavailable {
            source: Box::new(WeatherError::IpLocationFailed { reason: "status fail".into() }),
        };

        let source = std::error::Error::source(&err).expect("source must be kept");
        assert_eq!(source.to_string(), "Failed to get location from IP");
    }

    #[test]
    fn message_keys_group_errors_by_operation() {
        assert_eq!(WeatherError::NoLocationFound.message_key(), "location_error");
        assert_eq!(WeatherError::fetch_failed(None).message_key(), "weather_error");
    }
}
