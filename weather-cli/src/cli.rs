use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Select};
use weather_core::{
    Config, ConfigStore, DeviceGeolocation, FixedPosition, ForecastMode, GeocodingClient,
    Language, LocationResolver, Localizer, NoDeviceGeolocation, ResolvedLocation, WeatherError,
    provider_from_config,
};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the OpenWeather API key and the display language.
    Configure,

    /// Show weather where you are.
    ///
    /// Uses the given coordinates as the device position; without them the
    /// location is looked up from your IP address.
    Here {
        /// "day" (current + hourly) or "week" (daily averages).
        #[arg(long, default_value = "day")]
        mode: ForecastMode,

        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
    },

    /// Show weather for the best match of a city name.
    Show {
        city: String,

        #[arg(long, default_value = "day")]
        mode: ForecastMode,
    },

    /// List cities matching a name.
    Search { query: String },

    /// Switch the display language ("uk" or "en"); toggles when omitted.
    Language { language: Option<Language> },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut store = ConfigStore::at_default_location()?;
        let config = Config::load_from(store.path())?.with_env_overrides();
        let localizer = Localizer::load(&store, config.default_language())?;

        tracing::debug!(command = ?self.command, language = %localizer.language(), "dispatching command");

        match self.command {
            Command::Configure => configure(&store, &localizer)?,
            Command::Here { mode, lat, lon } => {
                let device: Box<dyn DeviceGeolocation> = match (lat, lon) {
                    (Some(lat), Some(lon)) => Box::new(FixedPosition { lat, lon }),
                    _ => Box::new(NoDeviceGeolocation),
                };
                let geocoder =
                    GeocodingClient::new(config.require_api_key()?.to_owned(), &config.endpoints);
                let resolver = LocationResolver::new(geocoder, device);

                eprintln!("{}", localizer.translate("loading", &[]));
                let location = resolver
                    .resolve_user_location()
                    .await
                    .map_err(|e| localized(&localizer, e))?;

                show_weather(&config, &localizer, &location, mode).await?;
            }
            Command::Show { city, mode } => {
                let provider = provider_from_config(&config)?;
                let cities = provider
                    .search_cities(&city, localizer.language())
                    .await
                    .map_err(|e| localized(&localizer, e))?;

                let Some(best) = cities.into_iter().next() else {
                    anyhow::bail!("{}: {city}", localizer.translate("no_results", &[]));
                };

                show_weather(&config, &localizer, &best.into(), mode).await?;
            }
            Command::Search { query } => {
                let provider = provider_from_config(&config)?;
                let cities = provider
                    .search_cities(&query, localizer.language())
                    .await
                    .map_err(|e| localized(&localizer, e))?;

                output::print_cities(&localizer, cities.into_iter().map(ResolvedLocation::from));
            }
            Command::Language { language } => {
                let localizer = match language {
                    Some(language) => localizer.set_language(&mut store, language)?,
                    None => localizer.toggle_language(&mut store)?,
                };
                println!(
                    "{}",
                    localizer.translate("language_changed", &[("language", &localizer.language())])
                );
            }
        }

        Ok(())
    }
}

async fn show_weather(
    config: &Config,
    localizer: &Localizer,
    location: &ResolvedLocation,
    mode: ForecastMode,
) -> anyhow::Result<()> {
    let provider = provider_from_config(config)?;
    let snapshot = provider
        .get_weather_data(location, mode, localizer.language())
        .await
        .map_err(|e| localized(localizer, e))?;

    output::print_snapshot(localizer, location, &snapshot);
    Ok(())
}

/// Interactive setup; writes only what the user entered, never env overrides.
fn configure(store: &ConfigStore, localizer: &Localizer) -> anyhow::Result<()> {
    let path = store.path();
    let mut stored = Config::load_from(path)?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_help_message("Leave empty to keep the current key")
        .prompt()
        .context("Failed to read API key")?;

    if !api_key.trim().is_empty() {
        stored.set_api_key(api_key.trim().to_string());
    }

    let languages = Language::all().to_vec();
    let current = stored.language.unwrap_or(localizer.language());
    let cursor = languages.iter().position(|l| *l == current).unwrap_or(0);

    let language = Select::new("Language:", languages)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Failed to read language")?;
    stored.language = Some(language);

    stored.save_to(path)?;
    tracing::info!(path = %path.display(), %language, "configuration saved");

    let localizer = Localizer::new(language);
    println!("{}", localizer.translate("configured", &[("path", &path.display())]));
    Ok(())
}

fn localized(localizer: &Localizer, err: WeatherError) -> anyhow::Error {
    let message = localizer.translate(err.message_key(), &[]);
    anyhow::Error::new(err).context(message)
}
