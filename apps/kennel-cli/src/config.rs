//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::str::FromStr;

use kennel_core::{EngineConfig, Money, RateTable, DEFAULT_CAT_SPACES, DEFAULT_DOG_SPACES};
use serde::Serialize;

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CliConfig {
    /// Free dog spaces at startup
    pub dog_spaces: u32,

    /// Free cat spaces at startup
    pub cat_spaces: u32,

    /// Nightly dog rate in cents
    pub dog_rate_cents: i64,

    /// Nightly cat rate in cents
    pub cat_rate_cents: i64,

    /// Bath add-on in cents
    pub bath_cents: i64,

    /// Full groom add-on in cents
    pub full_groom_cents: i64,

    /// Emit JSON log lines instead of compact text
    pub log_json: bool,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = CliConfig {
            dog_spaces: parse_or(&lookup, "KENNEL_DOG_SPACES", DEFAULT_DOG_SPACES)?,
            cat_spaces: parse_or(&lookup, "KENNEL_CAT_SPACES", DEFAULT_CAT_SPACES)?,
            dog_rate_cents: parse_or(&lookup, "KENNEL_DOG_RATE_CENTS", 4500)?,
            cat_rate_cents: parse_or(&lookup, "KENNEL_CAT_RATE_CENTS", 3500)?,
            bath_cents: parse_or(&lookup, "KENNEL_BATH_CENTS", 2500)?,
            full_groom_cents: parse_or(&lookup, "KENNEL_FULL_GROOM_CENTS", 5500)?,
            log_json: parse_or(&lookup, "KENNEL_LOG_JSON", false)?,
        };

        for (key, cents) in [
            ("KENNEL_DOG_RATE_CENTS", config.dog_rate_cents),
            ("KENNEL_CAT_RATE_CENTS", config.cat_rate_cents),
            ("KENNEL_BATH_CENTS", config.bath_cents),
            ("KENNEL_FULL_GROOM_CENTS", config.full_groom_cents),
        ] {
            if cents < 0 {
                return Err(ConfigError::Negative(key.to_string()));
            }
        }

        Ok(config)
    }

    pub fn rates(&self) -> RateTable {
        RateTable {
            dog_nightly: Money::from_cents(self.dog_rate_cents),
            cat_nightly: Money::from_cents(self.cat_rate_cents),
            bath: Money::from_cents(self.bath_cents),
            full_groom: Money::from_cents(self.full_groom_cents),
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            dog_spaces: self.dog_spaces,
            cat_spaces: self.cat_spaces,
            rates: self.rates(),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("{0} must not be negative")]
    Negative(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_with(pairs: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_match_reference_deployment() {
        let config = load_with(&[]).unwrap();
        assert_eq!(config.dog_spaces, 30);
        assert_eq!(config.cat_spaces, 12);
        assert!(!config.log_json);
        assert_eq!(config.rates(), RateTable::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = load_with(&[
            ("KENNEL_DOG_SPACES", "4"),
            ("KENNEL_CAT_SPACES", " 2 "),
            ("KENNEL_BATH_CENTS", "1000"),
            ("KENNEL_LOG_JSON", "true"),
        ])
        .unwrap();

        let engine = config.engine_config();
        assert_eq!(engine.dog_spaces, 4);
        assert_eq!(engine.cat_spaces, 2);
        assert_eq!(engine.rates.bath.cents(), 1000);
        assert!(config.log_json);
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = load_with(&[("KENNEL_DOG_SPACES", "lots")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref k) if k == "KENNEL_DOG_SPACES"));

        let err = load_with(&[("KENNEL_CAT_SPACES", "-1")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let err = load_with(&[("KENNEL_CAT_RATE_CENTS", "-5")]).unwrap_err();
        assert_eq!(err.to_string(), "KENNEL_CAT_RATE_CENTS must not be negative");
    }
}
