use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A place the weather can be fetched for. Always carries usable coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub name: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

/// One entry of a city search, in the provider's relevance order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitySearchResult {
    pub name: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl From<CitySearchResult> for ResolvedLocation {
    fn from(city: CitySearchResult) -> Self {
        Self {
            name: city.name,
            country: city.country,
            state: city.state,
            lat: city.lat,
            lon: city.lon,
        }
    }
}

/// Weather condition tag as reported by the provider, e.g. `{"main": "Clouds", "description": "broken clouds"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionTag {
    pub id: u32,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub weather: Vec<ConditionTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourPoint {
    pub timestamp: DateTime<Utc>,
    pub temp: f64,
    pub weather: Vec<ConditionTag>,
}

/// Averages over every forecast sample that falls on one calendar date.
///
/// `timestamp` and `weather` are taken from the first sample of the date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPoint {
    pub timestamp: DateTime<Utc>,
    pub avg_temp: f64,
    pub avg_humidity: u8,
    pub avg_wind_speed: f64,
    pub weather: Vec<ConditionTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly: Option<Vec<HourPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily: Option<Vec<DayPoint>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastMode {
    /// Current conditions plus the next 24 three-hour samples.
    #[default]
    Day,
    /// Five days of three-hour samples, averaged per date.
    Week,
}

impl ForecastMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastMode::Day => "day",
            ForecastMode::Week => "week",
        }
    }
}

impl fmt::Display for ForecastMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ForecastMode {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "day" => Ok(ForecastMode::Day),
            "week" => Ok(ForecastMode::Week),
            _ => Err(anyhow::anyhow!("Unknown forecast mode '{value}'. Supported modes: day, week.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_mode_parses_case_insensitively() {
        assert_eq!("Week".parse::<ForecastMode>().unwrap(), ForecastMode::Week);
        assert_eq!("day".parse::<ForecastMode>().unwrap(), ForecastMode::Day);
    }

    #[test]
    fn unknown_forecast_mode_error() {
        let err = "month".parse::<ForecastMode>().unwrap_err();
        assert!(err.to_string().contains("Unknown forecast mode"));
    }

    #[test]
    fn city_search_result_converts_into_location() {
        let city = CitySearchResult {
            name: "Lviv".into(),
            country: "UA".into(),
            state: Some("Lviv Oblast".into()),
            lat: 49.84,
            lon: 24.03,
        };

        let location = ResolvedLocation::from(city);
        assert_eq!(location.name, "Lviv");
        assert_eq!(location.state.as_deref(), Some("Lviv Oblast"));
        assert_eq!(location.lat, 49.84);
    }
}
