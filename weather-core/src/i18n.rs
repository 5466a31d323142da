//! Translated UI strings for Ukrainian and English.
//!
//! The active language is fixed for the lifetime of a [`Localizer`]. Switching
//! language persists the choice through a [`LanguageStore`] and hands back a
//! freshly loaded localizer; the old one is consumed.

use std::{fmt, str::FromStr};

use anyhow::Result;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

mod catalog;

use catalog::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Uk,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Uk => "uk",
            Language::En => "en",
        }
    }

    pub const fn all() -> &'static [Language] {
        &[Language::Uk, Language::En]
    }

    /// The other supported language.
    pub fn toggled(self) -> Self {
        match self {
            Language::Uk => Language::En,
            Language::En => Language::Uk,
        }
    }

    fn chrono_locale(&self) -> chrono::Locale {
        match self {
            Language::Uk => chrono::Locale::uk_UA,
            Language::En => chrono::Locale::en_US,
        }
    }

    fn catalog(&self) -> &'static [(&'static str, Node)] {
        match self {
            Language::Uk => catalog::UK,
            Language::En => catalog::EN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "uk" => Ok(Language::Uk),
            "en" => Ok(Language::En),
            _ => Err(anyhow::anyhow!("Unknown language '{value}'. Supported languages: uk, en.")),
        }
    }
}

/// Durable home of the language preference.
pub trait LanguageStore {
    fn load_language(&self) -> Result<Option<Language>>;
    fn save_language(&mut self, language: Language) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localizer {
    language: Language,
}

impl Localizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Build a localizer from the persisted preference, or `default` if none is stored.
    pub fn load(store: &impl LanguageStore, default: Language) -> Result<Self> {
        let language = store.load_language()?.unwrap_or(default);
        tracing::debug!(%language, "localizer loaded");
        Ok(Self::new(language))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Persist `language` and reload from the store.
    pub fn set_language(self, store: &mut impl LanguageStore, language: Language) -> Result<Self> {
        store.save_language(language)?;
        tracing::info!(from = %self.language, to = %language, "language changed");
        Self::load(&*store, language)
    }

    pub fn toggle_language(self, store: &mut impl LanguageStore) -> Result<Self> {
        let next = self.language.toggled();
        self.set_language(store, next)
    }

    /// Look up a dot-separated key path, e.g. `time_of_day.night`.
    ///
    /// Returns the key path itself when it doesn't lead to a string. `{name}`
    /// placeholders are replaced from `params`; unmatched ones stay as written.
    pub fn translate(&self, key: &str, params: &[(&str, &dyn fmt::Display)]) -> String {
        match lookup(self.language.catalog(), key) {
            Some(template) => substitute(template, params),
            None => substitute(key, params),
        }
    }

    /// Translate a provider condition phrase such as `"clear sky"`.
    /// Unknown phrases come back unchanged.
    pub fn translate_weather_condition(&self, condition: &str) -> String {
        let normalized = condition.to_lowercase();

        catalog::CONDITIONS
            .iter()
            .find(|(phrase, _, _)| phrase.to_lowercase() == normalized)
            .map(|(_, uk, en)| match self.language {
                Language::Uk => (*uk).to_string(),
                Language::En => (*en).to_string(),
            })
            .unwrap_or_else(|| condition.to_string())
    }

    /// Long date, e.g. "Friday, October 16, 2026".
    pub fn format_date<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        let pattern = match self.language {
            Language::Uk => "%A, %-d %B %Y",
            Language::En => "%A, %B %-d, %Y",
        };
        at.format_localized(pattern, self.language.chrono_locale()).to_string()
    }

    pub fn format_time<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        at.format_localized("%H:%M", self.language.chrono_locale()).to_string()
    }
}

fn lookup(mut nodes: &'static [(&'static str, Node)], key: &str) -> Option<&'static str> {
    let mut segments = key.split('.').peekable();

    while let Some(segment) = segments.next() {
        let (_, node) = nodes.iter().find(|(name, _)| *name == segment)?;
        match node {
            Node::Text(text) if segments.peek().is_none() => return Some(*text),
            Node::Group(children) if segments.peek().is_some() => nodes = *children,
            _ => return None,
        }
    }

    None
}

fn substitute(template: &str, params: &[(&str, &dyn fmt::Display)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        let is_placeholder =
            !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

        if !is_placeholder {
            // not a placeholder; keep the brace and rescan after it
            out.push('{');
            rest = after;
            continue;
        }

        let value = params
            .iter()
            .find(|(param, _)| *param == name)
            .map(|(_, value)| value.to_string())
            .filter(|value| !value.is_empty());

        match value {
            Some(value) => out.push_str(&value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[derive(Default)]
    struct MemoryStore {
        language: Option<Language>,
        saves: usize,
    }

    impl LanguageStore for MemoryStore {
        fn load_language(&self) -> Result<Option<Language>> {
            Ok(self.language)
        }

        fn save_language(&mut self, language: Language) -> Result<()> {
            self.language = Some(language);
            self.saves += 1;
            Ok(())
        }
    }

    #[test]
    fn translate_substitutes_placeholders() {
        let en = Localizer::new(Language::En);
        assert_eq!(
            en.translate("favorites_count", &[("current", &2), ("max", &5)]),
            "2 of 5 cities selected"
        );

        let uk = Localizer::new(Language::Uk);
        assert_eq!(
            uk.translate("favorites_count", &[("current", &2), ("max", &5)]),
            "Обрано 2 з 5 міст"
        );
    }

    #[test]
    fn translate_leaves_unmatched_placeholders() {
        let en = Localizer::new(Language::En);
        assert_eq!(en.translate("favorites_count", &[("current", &1)]), "1 of {max} cities selected");
        assert_eq!(en.translate("favorites_count", &[("current", &"")]), "{current} of {max} cities selected");
    }

    #[test]
    fn translate_walks_nested_groups() {
        let en = Localizer::new(Language::En);
        assert_eq!(en.translate("time_of_day.night", &[]), "Night");
        assert_eq!(en.translate("weather_conditions.partly_cloudy", &[]), "Partly Cloudy");

        let uk = Localizer::new(Language::Uk);
        assert_eq!(uk.translate("time_of_day.day", &[]), "День");
    }

    #[test]
    fn unknown_key_returns_key_path() {
        let en = Localizer::new(Language::En);
        assert_eq!(en.translate("nonexistent.key", &[]), "nonexistent.key");
        assert_eq!(en.translate("main.deeper", &[]), "main.deeper");
        assert_eq!(en.translate("time_of_day", &[]), "time_of_day");
    }

    #[test]
    fn later_duplicate_key_wins() {
        assert_eq!(Localizer::new(Language::En).translate("day", &[]), "Today");
        assert_eq!(Localizer::new(Language::Uk).translate("day", &[]), "Сьогодні");
    }

    #[test]
    fn weather_condition_matches_case_insensitively() {
        let en = Localizer::new(Language::En);
        assert_eq!(en.translate_weather_condition("Clear Sky"), "Clear sky");

        let uk = Localizer::new(Language::Uk);
        assert_eq!(uk.translate_weather_condition("OVERCAST CLOUDS"), "Похмуро");
    }

    #[test]
    fn unknown_weather_condition_passes_through() {
        let uk = Localizer::new(Language::Uk);
        assert_eq!(uk.translate_weather_condition("Volcanic Ash"), "Volcanic Ash");
    }

    #[test]
    fn load_uses_default_when_nothing_persisted() {
        let store = MemoryStore::default();
        let localizer = Localizer::load(&store, Language::En).unwrap();
        assert_eq!(localizer.language(), Language::En);
    }

    #[test]
    fn set_language_persists_and_reloads() {
        let mut store = MemoryStore::default();
        let localizer = Localizer::load(&store, Language::Uk).unwrap();

        let localizer = localizer.set_language(&mut store, Language::En).unwrap();

        assert_eq!(localizer.language(), Language::En);
        assert_eq!(store.language, Some(Language::En));
        assert_eq!(store.saves, 1);
    }

    #[test]
    fn toggle_language_flips_between_languages() {
        let mut store = MemoryStore { language: Some(Language::En), saves: 0 };
        let localizer = Localizer::load(&store, Language::Uk).unwrap();

        let localizer = localizer.toggle_language(&mut store).unwrap();
        assert_eq!(localizer.language(), Language::Uk);

        let localizer = localizer.toggle_language(&mut store).unwrap();
        assert_eq!(localizer.language(), Language::En);
        assert_eq!(store.saves, 2);
    }

    #[test]
    fn language_parse_roundtrip() {
        for language in Language::all() {
            let parsed: Language = language.as_str().parse().expect("roundtrip should succeed");
            assert_eq!(*language, parsed);
        }
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn format_date_and_time_in_english() {
        let en = Localizer::new(Language::En);
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 5, 0).unwrap();

        assert_eq!(en.format_date(&at), "Friday, October 16, 2026");
        assert_eq!(en.format_time(&at), "09:05");
    }
}
