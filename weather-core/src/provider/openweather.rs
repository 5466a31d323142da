use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    config::Endpoints,
    error::WeatherError,
    geocoding::GeoPlace,
    i18n::Language,
    model::{
        CitySearchResult, ConditionTag, CurrentConditions, DayPoint, ForecastMode, HourPoint,
        ResolvedLocation, WeatherSnapshot,
    },
};

use super::WeatherProvider;

const SEARCH_LIMIT: &str = "5";
const DAY_SAMPLES: u32 = 24;
const WEEK_SAMPLES: u32 = 40;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    weather_url: String,
    geocoding_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, endpoints: &Endpoints) -> Self {
        Self {
            api_key,
            weather_url: endpoints.weather_url.trim_end_matches('/').to_string(),
            geocoding_url: endpoints.geocoding_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        location: &ResolvedLocation,
        count: Option<u32>,
        language: Language,
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{endpoint}", self.weather_url);

        let mut query = vec![
            ("lat", location.lat.to_string()),
            ("lon", location.lon.to_string()),
            ("appid", self.api_key.clone()),
            ("units", "metric".to_string()),
            ("lang", language.as_str().to_string()),
        ];
        if let Some(cnt) = count {
            query.push(("cnt", cnt.to_string()));
        }

        let res = self.http.get(&url).query(&query).send().await.map_err(|e| {
            tracing::error!(error = %e, endpoint, "failed to send request to OpenWeather");
            WeatherError::fetch_failed(None)
        })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            tracing::error!(error = %e, endpoint, "failed to read OpenWeather response body");
            WeatherError::fetch_failed(None)
        })?;

        if !status.is_success() {
            tracing::error!(%status, endpoint, body = %truncate_body(&body), "OpenWeather request failed");
            let message = serde_json::from_str::<OwError>(&body).ok().and_then(|e| e.message);
            return Err(WeatherError::fetch_failed(message));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, endpoint, "failed to parse OpenWeather JSON");
            WeatherError::fetch_failed(None)
        })
    }

    async fn fetch_day(
        &self,
        location: &ResolvedLocation,
        language: Language,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let (current, forecast) = tokio::try_join!(
            self.fetch::<OwCurrentResponse>("weather", location, None, language),
            self.fetch::<OwForecastResponse>("forecast", location, Some(DAY_SAMPLES), language)
        )?;

        let hourly = forecast
            .list
            .into_iter()
            .filter_map(|entry| {
                Some(HourPoint {
                    timestamp: unix_to_utc(entry.dt)?,
                    temp: entry.main.temp,
                    weather: entry.weather,
                })
            })
            .collect();

        Ok(WeatherSnapshot {
            current: CurrentConditions {
                temp: current.main.temp,
                feels_like: current.main.feels_like,
                humidity: current.main.humidity,
                wind_speed: current.wind.speed,
                weather: current.weather,
            },
            hourly: Some(hourly),
            daily: None,
        })
    }

    async fn fetch_week(
        &self,
        location: &ResolvedLocation,
        language: Language,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let forecast: OwForecastResponse =
            self.fetch("forecast", location, Some(WEEK_SAMPLES), language).await?;

        // "current" in week mode is the first raw sample, not a daily average
        let first = forecast.list.first().ok_or_else(|| {
            tracing::error!("OpenWeather forecast response contained no data");
            WeatherError::fetch_failed(None)
        })?;

        let current = CurrentConditions {
            temp: first.main.temp,
            feels_like: first.main.feels_like,
            humidity: first.main.humidity,
            wind_speed: first.wind.speed,
            weather: first.weather.clone(),
        };

        let daily = aggregate_daily(&forecast.list, &Local);

        Ok(WeatherSnapshot { current, hourly: None, daily: Some(daily) })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn search_cities(
        &self,
        query: &str,
        language: Language,
    ) -> Result<Vec<CitySearchResult>, WeatherError> {
        tracing::debug!(query, "searching cities");
        let url = format!("{}/direct", self.geocoding_url);

        let places: Vec<GeoPlace> = self
            .http
            .get(&url)
            .query(&[("q", query), ("limit", SEARCH_LIMIT), ("appid", self.api_key.as_str())])
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| {
                tracing::error!(error = %e, "city search request failed");
                WeatherError::CitySearchFailed(e)
            })?
            .json()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "city search response could not be decoded");
                WeatherError::CitySearchFailed(e)
            })?;

        Ok(places.into_iter().map(|place| city_from_place(place, language)).collect())
    }

    async fn get_weather_data(
        &self,
        location: &ResolvedLocation,
        mode: ForecastMode,
        language: Language,
    ) -> Result<WeatherSnapshot, WeatherError> {
        tracing::debug!(name = %location.name, %mode, %language, "fetching weather");

        match mode {
            ForecastMode::Day => self.fetch_day(location, language).await,
            ForecastMode::Week => self.fetch_week(location, language).await,
        }
    }
}

fn city_from_place(mut place: GeoPlace, language: Language) -> CitySearchResult {
    let name = match language {
        Language::Uk => place.local_names.remove(Language::Uk.as_str()).unwrap_or(place.name),
        Language::En => place.name,
    };

    CitySearchResult {
        name,
        country: place.country,
        state: place.state,
        lat: place.lat,
        lon: place.lon,
    }
}

struct DayBucket {
    date: NaiveDate,
    timestamp: DateTime<Utc>,
    weather: Vec<ConditionTag>,
    samples: usize,
    temp_sum: f64,
    humidity_sum: f64,
    wind_sum: f64,
}

/// Average forecast samples per calendar date in `tz`, in order of first appearance.
fn aggregate_daily<Tz: TimeZone>(entries: &[OwForecastEntry], tz: &Tz) -> Vec<DayPoint> {
    let mut buckets: Vec<DayBucket> = Vec::new();

    for entry in entries {
        let Some(timestamp) = unix_to_utc(entry.dt) else {
            tracing::warn!(dt = entry.dt, "skipping forecast sample with invalid timestamp");
            continue;
        };
        let date = timestamp.with_timezone(tz).date_naive();

        let idx = match buckets.iter().position(|b| b.date == date) {
            Some(idx) => idx,
            None => {
                buckets.push(DayBucket {
                    date,
                    timestamp,
                    weather: entry.weather.clone(),
                    samples: 0,
                    temp_sum: 0.0,
                    humidity_sum: 0.0,
                    wind_sum: 0.0,
                });
                buckets.len() - 1
            }
        };

        let bucket = &mut buckets[idx];
        bucket.samples += 1;
        bucket.temp_sum += entry.main.temp;
        bucket.humidity_sum += f64::from(entry.main.humidity);
        bucket.wind_sum += entry.wind.speed;
    }

    buckets
        .into_iter()
        .map(|b| {
            let n = b.samples as f64;
            DayPoint {
                timestamp: b.timestamp,
                avg_temp: b.temp_sum / n,
                avg_humidity: (b.humidity_sum / n).round() as u8,
                avg_wind_speed: b.wind_sum / n,
                weather: b.weather,
            }
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<ConditionTag>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<ConditionTag>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct OwError {
    message: Option<String>,
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
