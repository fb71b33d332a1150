use crate::application::PresenterSettings;
use crate::infrastructure::{BuiltinSeed, EmptySeed, JsonSeedFile, SeedSource};
use anyhow::{Context, Result, anyhow};
use iso_currency::Currency;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedChoice {
    Builtin,
    Empty,
    File(PathBuf),
}

impl SeedChoice {
    /// `builtin`, `empty`, or anything else as a path.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "builtin" => Self::Builtin,
            "empty" => Self::Empty,
            path => Self::File(PathBuf::from(path)),
        }
    }

    pub fn source(&self) -> Box<dyn SeedSource> {
        match self {
            Self::Builtin => Box::new(BuiltinSeed),
            Self::Empty => Box::new(EmptySeed),
            Self::File(path) => Box::new(JsonSeedFile::new(path.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub number_locale: String,
    pub currency: String,
    pub display_locale: String,
    pub seed: SeedChoice,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let number_locale = lookup("SALARY_LOCALE").unwrap_or_else(|| "id".to_string());
        let currency = lookup("SALARY_CURRENCY").unwrap_or_else(|| "IDR".to_string());
        let display_locale =
            lookup("SALARY_DISPLAY_LOCALE").unwrap_or_else(|| "en_US".to_string());

        let seed = lookup("SALARY_SEED")
            .map(|raw| SeedChoice::parse(&raw))
            .unwrap_or_else(Self::default_seed);

        Self {
            number_locale,
            currency,
            display_locale,
            seed,
        }
    }

    /// `<config dir>/salary-ledger/seed.json` if present, else the built-in data.
    fn default_seed() -> SeedChoice {
        dirs::config_dir()
            .map(|dir| dir.join("salary-ledger").join("seed.json"))
            .filter(|path| path.exists())
            .map(SeedChoice::File)
            .unwrap_or(SeedChoice::Builtin)
    }

    pub fn presenter_settings(&self) -> Result<PresenterSettings> {
        let number_locale = num_format::Locale::from_name(&self.number_locale)
            .with_context(|| format!("Unknown number locale '{}'", self.number_locale))?;

        let currency = Currency::from_code(&self.currency.to_uppercase())
            .ok_or_else(|| anyhow!("Unknown currency code '{}'", self.currency))?;

        let display_locale = chrono::Locale::try_from(self.display_locale.as_str())
            .map_err(|_| anyhow!("Unknown display locale '{}'", self.display_locale))?;

        Ok(PresenterSettings {
            number_locale,
            currency,
            display_locale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_rupiah_with_english_dates() {
        let config = Config::from_lookup(lookup_from(&[("SALARY_SEED", "builtin")]));
        assert_eq!(config.presenter_settings().unwrap(), PresenterSettings::default());
        assert_eq!(config.seed, SeedChoice::Builtin);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SALARY_LOCALE", "en"),
            ("SALARY_CURRENCY", "usd"),
            ("SALARY_DISPLAY_LOCALE", "id_ID"),
            ("SALARY_SEED", "/tmp/seed.json"),
        ]));

        let settings = config.presenter_settings().unwrap();
        assert_eq!(settings.number_locale, num_format::Locale::en);
        assert_eq!(settings.currency, Currency::USD);
        assert_eq!(settings.display_locale, chrono::Locale::id_ID);
        assert_eq!(config.seed, SeedChoice::File(PathBuf::from("/tmp/seed.json")));
    }

    #[test]
    fn unknown_names_are_errors() {
        let config = Config::from_lookup(lookup_from(&[("SALARY_CURRENCY", "XYZ")]));
        let err = config.presenter_settings().unwrap_err();
        assert_eq!(err.to_string(), "Unknown currency code 'XYZ'");

        let config = Config::from_lookup(lookup_from(&[("SALARY_LOCALE", "klingon")]));
        assert!(config.presenter_settings().is_err());
    }

    #[test]
    fn seed_choice_parsing() {
        assert_eq!(SeedChoice::parse("empty"), SeedChoice::Empty);
        assert_eq!(SeedChoice::parse(" builtin "), SeedChoice::Builtin);
        assert_eq!(
            SeedChoice::parse("data/seed.json"),
            SeedChoice::File(PathBuf::from("data/seed.json"))
        );
    }
}
