use std::{env, path::PathBuf, str::FromStr};

use directories::UserDirs;
use thiserror::Error;

const LIBRARY_DIR: &str = "TABPAGER_LIBRARY_DIR";
const FULL_RESCAN: &str = "TABPAGER_FULL_RESCAN";
const TICK_MS: &str = "TABPAGER_TICK_MS";
const MOUSE: &str = "TABPAGER_MOUSE";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub library_dir: PathBuf,
    pub full_rescan: bool,
    pub tick_ms: u64,
    pub mouse: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            library_dir: default_library_dir(),
            full_rescan: false,
            tick_ms: 33,
            mouse: true,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(dir) = lookup(LIBRARY_DIR).filter(|v| !v.trim().is_empty()) {
            config.library_dir = PathBuf::from(dir);
        }
        if let Some(value) = lookup(FULL_RESCAN) {
            config.full_rescan = parse_bool(FULL_RESCAN, &value)?;
        }
        if let Some(value) = lookup(TICK_MS) {
            config.tick_ms = parse::<u64>(TICK_MS, &value)?;
            if config.tick_ms == 0 {
                return Err(ConfigError::Invalid {
                    key: TICK_MS,
                    value,
                });
            }
        }
        if let Some(value) = lookup(MOUSE) {
            config.mouse = parse_bool(MOUSE, &value)?;
        }

        Ok(config)
    }
}

fn default_library_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.audio_dir().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ShellConfig::from_lookup(lookup(&[])).unwrap();
        assert!(!config.full_rescan);
        assert_eq!(config.tick_ms, 33);
        assert!(config.mouse);
    }

    #[test]
    fn test_overrides() {
        let config = ShellConfig::from_lookup(lookup(&[
            (LIBRARY_DIR, "/music"),
            (FULL_RESCAN, "yes"),
            (TICK_MS, "50"),
            (MOUSE, "off"),
        ]))
        .unwrap();

        assert_eq!(config.library_dir, PathBuf::from("/music"));
        assert!(config.full_rescan);
        assert_eq!(config.tick_ms, 50);
        assert!(!config.mouse);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            ShellConfig::from_lookup(lookup(&[(TICK_MS, "fast")])),
            Err(ConfigError::Invalid {
                key: TICK_MS,
                value: "fast".into()
            })
        );
        assert!(ShellConfig::from_lookup(lookup(&[(TICK_MS, "0")])).is_err());
        assert!(ShellConfig::from_lookup(lookup(&[(MOUSE, "maybe")])).is_err());
    }
}
