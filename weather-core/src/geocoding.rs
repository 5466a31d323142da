//! Coordinates to place names, and the IP-based location fallback.

use reqwest::Client;
use serde::Deserialize;

use crate::{config::Endpoints, error::WeatherError, model::ResolvedLocation};

const IP_FIELDS: &str = "status,message,country,countryCode,city,lat,lon";

#[derive(Debug, Clone)]
pub struct GeocodingClient {
    api_key: String,
    geocoding_url: String,
    ip_url: String,
    http: Client,
}

impl GeocodingClient {
    pub fn new(api_key: String, endpoints: &Endpoints) -> Self {
        Self {
            api_key,
            geocoding_url: endpoints.geocoding_url.trim_end_matches('/').to_string(),
            ip_url: endpoints.ip_url.clone(),
            http: Client::new(),
        }
    }

    /// Name the place at (`lat`, `lon`) using the most relevant reverse-geocoding hit.
    pub async fn reverse_geocode(&self, lat: f64, lon: f64) -> Result<ResolvedLocation, WeatherError> {
        let url = format!("{}/reverse", self.geocoding_url);

        let places: Vec<GeoPlace> = self
            .http
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("limit", "1".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| {
                tracing::error!(error = %e, "reverse geocoding request failed");
                WeatherError::GeocodeRequestFailed(e)
            })?
            .json()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "reverse geocoding response could not be decoded");
                WeatherError::GeocodeRequestFailed(e)
            })?;

        let place = places.into_iter().next().ok_or_else(|| {
            tracing::warn!(lat, lon, "reverse geocoding returned no places");
            WeatherError::NoLocationFound
        })?;

        tracing::debug!(name = %place.name, "reverse geocoded");
        Ok(ResolvedLocation {
            name: place.name,
            country: place.country,
            state: place.state,
            lat: place.lat,
            lon: place.lon,
        })
    }

    /// Locate the caller from their public IP address.
    pub async fn locate_by_ip(&self) -> Result<ResolvedLocation, WeatherError> {
        let res = self
            .http
            .get(&self.ip_url)
            .query(&[("fields", IP_FIELDS)])
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(ip_failed)?;

        let body: IpApiResponse = res.json().await.map_err(ip_failed)?;

        if body.status != "success" {
            let reason = body.message.unwrap_or_else(|| format!("status {}", body.status));
            tracing::error!(%reason, "IP geolocation reported failure");
            return Err(WeatherError::IpLocationFailed { reason });
        }

        match (body.city, body.country, body.lat, body.lon) {
            (Some(name), Some(country), Some(lat), Some(lon)) => {
                tracing::debug!(%name, country_code = ?body.country_code, "located by IP");
                Ok(ResolvedLocation { name, country, state: None, lat, lon })
            }
            _ => {
                tracing::error!("IP geolocation response is missing location fields");
                Err(WeatherError::IpLocationFailed {
                    reason: "incomplete location in response".to_string(),
                })
            }
        }
    }
}

fn ip_failed(e: reqwest::Error) -> WeatherError {
    tracing::error!(error = %e, "IP geolocation request failed");
    WeatherError::IpLocationFailed { reason: e.to_string() }
}

/// `"{city}, {state}, {country}"`, or `"{city}, {country}"` when there is no state.
pub fn format_address(location: &ResolvedLocation) -> String {
    match location.state.as_deref().filter(|s| !s.is_empty()) {
        Some(state) => format!("{}, {}, {}", location.name, state, location.country),
        None => format!("{}, {}", location.name, location.country),
    }
}

/// One place from the OpenWeather geocoding API; shared by reverse and direct lookups.
#[derive(Debug, Deserialize)]
pub(crate) struct GeoPlace {
    pub name: String,
    #[serde(default)]
    pub local_names: std::collections::HashMap<String, String>,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub country: String,
    pub state: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    country: Option<String>,
    country_code: Option<String>,
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}
