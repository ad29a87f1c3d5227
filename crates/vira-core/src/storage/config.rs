//! TOML-based application configuration.
//!
//! Stores user preferences for the CLI front end:
//! - The preset minute list offered for countdowns
//! - The default countdown length
//! - Output formatting
//!
//! Configuration is stored at `~/.config/vira/config.toml`. The engine's
//! own constants (tick periods, the 59:59 manual-entry bound) are fixed and
//! not configurable.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;
use crate::timer::PRESET_MINUTES;

/// Timer front-end configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Preset countdown durations offered by the CLI, in minutes.
    #[serde(default = "default_presets_min")]
    pub presets_min: Vec<u64>,
    /// Countdown length used when none is given, in minutes.
    #[serde(default = "default_countdown_min")]
    pub default_countdown_min: u64,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit events as JSON instead of formatted lines.
    #[serde(default)]
    pub json: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/vira/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_presets_min() -> Vec<u64> {
    PRESET_MINUTES.to_vec()
}

fn default_countdown_min() -> u64 {
    5
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            presets_min: default_presets_min(),
            default_countdown_min: default_countdown_min(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { json: false }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timer: TimerConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Path of the configuration file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when the file does
    /// not exist yet.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Save the configuration.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_builtin_presets() {
        let config = Config::default();
        assert_eq!(config.timer.presets_min, vec![1, 5, 10, 15]);
        assert_eq!(config.timer.default_countdown_min, 5);
        assert!(!config.output.json);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.timer.presets_min, vec![1, 5, 10, 15]);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.timer.presets_min = vec![2, 20];
        config.output.json = true;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.timer.presets_min, vec![2, 20]);
        assert!(loaded.output.json);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[timer]\ndefault_countdown_min = 10\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.timer.default_countdown_min, 10);
        assert_eq!(loaded.timer.presets_min, vec![1, 5, 10, 15]);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timer = not toml").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseFailed(_))
        ));
    }
}
