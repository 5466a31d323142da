//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & the persisted language preference
//! - Location resolution (device position, reverse geocoding, IP fallback)
//! - Abstraction over weather providers, with an OpenWeather implementation
//! - Shared domain models and the Ukrainian/English localizer
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod geocoding;
pub mod i18n;
pub mod location;
pub mod model;
pub mod provider;

pub use config::{Config, ConfigStore, Endpoints};
pub use error::WeatherError;
pub use geocoding::{GeocodingClient, format_address};
pub use i18n::{Language, LanguageStore, Localizer};
pub use location::{DeviceFix, DeviceGeolocation, FixedPosition, LocationResolver, NoDeviceGeolocation};
pub use model::{
    CitySearchResult, ConditionTag, CurrentConditions, DayPoint, ForecastMode, HourPoint,
    ResolvedLocation, WeatherSnapshot,
};
pub use provider::{WeatherProvider, provider_from_config};
