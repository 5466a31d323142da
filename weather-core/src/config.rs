use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::i18n::{Language, LanguageStore};

pub const API_KEY_ENV: &str = "WEATHER_API_KEY";
pub const DEFAULT_LANGUAGE_ENV: &str = "WEATHER_DEFAULT_LANGUAGE";

/// Base URLs of the upstream services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub weather_url: String,
    pub geocoding_url: String,
    pub ip_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            weather_url: "https://api.openweathermap.org/data/2.5".to_string(),
            geocoding_url: "https://api.openweathermap.org/geo/1.0".to_string(),
            ip_url: "http://ip-api.com/json/".to_string(),
        }
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeather API key.
    pub api_key: Option<String>,

    /// Persisted UI language, written when the user switches language.
    pub language: Option<Language>,

    /// Example TOML:
    /// [endpoints]
    /// weather_url = "https://api.openweathermap.org/data/2.5"
    #[serde(default)]
    pub endpoints: Endpoints,

    #[serde(skip)]
    default_language: Option<Language>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Apply `WEATHER_API_KEY` / `WEATHER_DEFAULT_LANGUAGE` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from `lookup`. An env API key wins over the stored one;
    /// the env language only seeds the default, never the persisted choice.
    /// An unparseable env language is logged and ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }

        if let Some(lang) = lookup(DEFAULT_LANGUAGE_ENV).filter(|l| !l.trim().is_empty()) {
            match lang.parse::<Language>() {
                Ok(lang) => self.default_language = Some(lang),
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring invalid {DEFAULT_LANGUAGE_ENV}");
                }
            }
        }

        self
    }

    /// Language to start with when none has been persisted.
    pub fn default_language(&self) -> Language {
        self.default_language.unwrap_or_default()
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| {
            anyhow!(
                "No OpenWeather API key configured.\n\
                 Hint: run `weather configure` or set {API_KEY_ENV}."
            )
        })
    }
}

/// Language preference persisted in the config file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(Config::config_file_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LanguageStore for ConfigStore {
    fn load_language(&self) -> Result<Option<Language>> {
        Ok(Config::load_from(&self.path)?.language)
    }

    fn save_language(&mut self, language: Language) -> Result<()> {
        let mut cfg = Config::load_from(&self.path)?;
        cfg.language = Some(language);
        cfg.save_to(&self.path)
    }
}
