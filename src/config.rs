// src/config.rs
use std::env;
use std::path::PathBuf;

use log::warn;
use thiserror::Error;

use crate::services::dashboard::PresentationConfig;
use crate::services::format::Locale;

const DEFAULT_PORT: u16 = 3030;
const DEFAULT_CHAIN_STORES: u32 = 50;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub presentation: PresentationConfig,
    pub default_store_count: u32,
    pub presets_csv: Option<PathBuf>,
}

fn invalid(name: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(name, value, "expected true or false")),
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(v) => v.trim().parse::<u16>().map_err(|e| invalid("PORT", &v, e))?,
            None => {
                warn!("$PORT not set, defaulting to {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let locale = match lookup("DISPLAY_LOCALE") {
            Some(v) => v.parse::<Locale>().map_err(|e| invalid("DISPLAY_LOCALE", &v, e))?,
            None => Locale::default(),
        };

        let expo = match lookup("EXPO_MODE") {
            Some(v) => parse_bool("EXPO_MODE", &v)?,
            None => true,
        };

        let multi_store = match lookup("MULTI_STORE") {
            Some(v) => parse_bool("MULTI_STORE", &v)?,
            None => true,
        };

        let default_store_count = match lookup("DEFAULT_STORE_COUNT") {
            Some(v) => {
                let count = v
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| invalid("DEFAULT_STORE_COUNT", &v, e))?;
                if count == 0 {
                    return Err(invalid("DEFAULT_STORE_COUNT", &v, "must be at least 1"));
                }
                count
            }
            None if multi_store => DEFAULT_CHAIN_STORES,
            None => 1,
        };

        if !multi_store && default_store_count != 1 {
            warn!("MULTI_STORE is off, ignoring DEFAULT_STORE_COUNT={}", default_store_count);
        }

        Ok(Self {
            port,
            presentation: PresentationConfig {
                locale,
                expo,
                multi_store,
            },
            default_store_count: if multi_store { default_store_count } else { 1 },
            presets_csv: lookup("PRESETS_CSV").filter(|p| !p.trim().is_empty()).map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.port, 3030);
        assert_eq!(config.presentation, PresentationConfig::default());
        assert_eq!(config.default_store_count, 50);
        assert_eq!(config.presets_csv, None);
    }

    #[test]
    fn single_store_pins_default_count() {
        let config = config(&[("MULTI_STORE", "false"), ("DEFAULT_STORE_COUNT", "8")]).unwrap();
        assert!(!config.presentation.multi_store);
        assert_eq!(config.default_store_count, 1);
    }

    #[test]
    fn explicit_values() {
        let config = config(&[
            ("PORT", "8080"),
            ("DISPLAY_LOCALE", "en"),
            ("EXPO_MODE", "off"),
            ("DEFAULT_STORE_COUNT", "12"),
            ("PRESETS_CSV", "presets.csv"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.presentation.locale, Locale::En);
        assert!(!config.presentation.expo);
        assert_eq!(config.default_store_count, 12);
        assert_eq!(config.presets_csv, Some(PathBuf::from("presets.csv")));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(config(&[("PORT", "http")]), Err(ConfigError::Invalid { name: "PORT", .. })));
        assert!(config(&[("EXPO_MODE", "maybe")]).is_err());
        assert!(config(&[("DEFAULT_STORE_COUNT", "0")]).is_err());
        assert!(config(&[("DISPLAY_LOCALE", "fr")]).is_err());
    }
}
