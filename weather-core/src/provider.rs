use crate::{
    CitySearchResult, Config, ForecastMode, Language, ResolvedLocation, WeatherError,
    WeatherSnapshot, provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of city search results and weather snapshots.
///
/// The display language is passed on every call, so a provider never holds on
/// to a language across a language switch.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn search_cities(
        &self,
        query: &str,
        language: Language,
    ) -> Result<Vec<CitySearchResult>, WeatherError>;

    async fn get_weather_data(
        &self,
        location: &ResolvedLocation,
        mode: ForecastMode,
        language: Language,
    ) -> Result<WeatherSnapshot, WeatherError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.require_api_key()?;
    Ok(Box::new(OpenWeatherProvider::new(api_key.to_owned(), &config.endpoints)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No OpenWeather API key configured"));
    }

    #[test]
    fn provider_from_config_works_when_configured() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        let provider = provider_from_config(&cfg);
        assert!(provider.is_ok());
    }
}
