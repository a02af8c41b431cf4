//! Runtime configuration loaded from TOML.
//!
//! Lookup order: explicit path, `BLOCKFALL_CONFIG`, then
//! `<config dir>/blockfall/config.toml`. A missing file means defaults.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::term::MAX_CELL_WIDTH;
use crate::types::{DEFAULT_TICK_PERIODS_MS, LEVEL_THRESHOLDS};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "BLOCKFALL_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed RNG seed; `None` seeds from the clock.
    pub seed: Option<u32>,
    /// Gravity period per level in milliseconds, level 1 first. Must have
    /// one entry per level.
    pub tick_periods_ms: Vec<u64>,
    /// Terminal columns per board cell, clamped to `1..=MAX_CELL_WIDTH`.
    pub cell_width: u16,
    /// Where log output goes; logging is off without it.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            tick_periods_ms: DEFAULT_TICK_PERIODS_MS.to_vec(),
            cell_width: 2,
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validated()
    }

    /// Reject settings the game cannot run with and clamp the rest.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        if self.tick_periods_ms.len() != LEVEL_THRESHOLDS.len() {
            return Err(ConfigError::Invalid(format!(
                "tick_periods_ms needs {} entries (one per level), got {}",
                LEVEL_THRESHOLDS.len(),
                self.tick_periods_ms.len()
            )));
        }
        self.cell_width = self.cell_width.clamp(1, MAX_CELL_WIDTH);
        Ok(self)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write this config to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

/// Resolve the config file path without touching the filesystem.
pub fn config_file_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|dir| dir.join("blockfall").join("config.toml"))
}

/// Load the config, falling back to defaults when no file exists.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let Some(path) = config_file_path(explicit) else {
        return Ok(Config::default());
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => Config::from_toml(&contents),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
        Err(err) => Err(err.into()),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config I/O error: {err}"),
            ConfigError::Parse(err) => write!(f, "invalid config file: {err}"),
            ConfigError::Serialize(err) => write!(f, "cannot serialize config: {err}"),
            ConfigError::Invalid(reason) => write!(f, "invalid config value: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::from_toml("seed = 42\ncell_width = 1\n").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.cell_width, 1);
        assert_eq!(config.tick_periods_ms, DEFAULT_TICK_PERIODS_MS.to_vec());
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            seed: Some(7),
            tick_periods_ms: vec![900, 700, 500, 300, 100],
            cell_width: 3,
            log_file: Some(PathBuf::from("/tmp/blockfall.log")),
        };
        config.save(&path).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "seed = \"not a number\"").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid config file"));
    }

    #[test]
    fn test_tick_list_must_cover_every_level() {
        for periods in ["[]", "[500, 250]", "[1, 2, 3, 4, 5, 6]"] {
            let err = Config::from_toml(&format!("tick_periods_ms = {periods}")).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{periods}");
        }
        let ok = Config::from_toml("tick_periods_ms = [5, 4, 3, 2, 1]").unwrap();
        assert_eq!(ok.tick_periods_ms, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_cell_width_is_clamped() {
        assert_eq!(Config::from_toml("cell_width = 60000").unwrap().cell_width, MAX_CELL_WIDTH);
        assert_eq!(Config::from_toml("cell_width = 0").unwrap().cell_width, 1);
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = PathBuf::from("/some/where.toml");
        assert_eq!(config_file_path(Some(&path)), Some(path));
    }
}
