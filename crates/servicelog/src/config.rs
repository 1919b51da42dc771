//! Configuration management for servicelog.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::reminder::MonthOverflow;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "servicelog";

/// Default snapshot file name.
const SNAPSHOT_FILE_NAME: &str = "garage.json";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `SERVICELOG_`, `__` between
///    section and key, e.g. `SERVICELOG_REMINDERS__DISPLAY_LIMIT=8`)
/// 2. TOML config file at `~/.config/servicelog/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Snapshot configuration.
    pub snapshot: SnapshotConfig,
    /// Reminder evaluation configuration.
    pub reminders: ReminderConfig,
}

/// Where the garage snapshot lives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Path to the snapshot file.
    /// Defaults to `~/.local/share/servicelog/garage.json`
    pub path: Option<PathBuf>,
}

/// Reminder-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// Number of due statuses shown unless all are requested.
    pub display_limit: usize,
    /// How to add months to dates whose day does not exist in the target
    /// month.
    pub month_overflow: MonthOverflow,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            display_limit: 4,
            month_overflow: MonthOverflow::Clamp,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("SERVICELOG_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.reminders.display_limit == 0 {
            return Err(Error::ConfigValidation {
                message: "display_limit must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Get the snapshot path, resolving defaults if not set.
    #[must_use]
    pub fn snapshot_path(&self) -> PathBuf {
        self.snapshot
            .path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(SNAPSHOT_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.snapshot.path.is_none());
        assert_eq!(config.reminders.display_limit, 4);
        assert_eq!(config.reminders.month_overflow, MonthOverflow::Clamp);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_display_limit() {
        let mut config = Config::default();
        config.reminders.display_limit = 0;

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("display_limit"));
    }

    #[test]
    fn test_snapshot_path_default() {
        let config = Config::default();
        let path = config.snapshot_path();

        assert!(path.to_string_lossy().contains("garage.json"));
        assert!(path.to_string_lossy().contains("servicelog"));
    }

    #[test]
    fn test_snapshot_path_custom() {
        let mut config = Config::default();
        config.snapshot.path = Some(PathBuf::from("/custom/garage.json"));

        assert_eq!(config.snapshot_path(), PathBuf::from("/custom/garage.json"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("servicelog"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[snapshot]
path = "/data/garage.json"

[reminders]
display_limit = 10
month_overflow = "roll_over"
"#,
        )
        .unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(config.snapshot_path(), PathBuf::from("/data/garage.json"));
        assert_eq!(config.reminders.display_limit, 10);
        assert_eq!(config.reminders.month_overflow, MonthOverflow::RollOver);
    }

    #[test]
    fn test_load_rejects_invalid_toml_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[reminders]\ndisplay_limit = 0\n").unwrap();

        let err = Config::load_from(Some(path)).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { .. }));
    }

    #[test]
    fn test_load_rejects_unknown_overflow_rule() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[reminders]\nmonth_overflow = \"round\"\n").unwrap();

        let err = Config::load_from(Some(path)).unwrap_err();
        assert!(matches!(err, Error::ConfigLoad(_)));
    }

    #[test]
    fn test_reminder_config_deserialize() {
        let json = r#"{"display_limit": 2}"#;
        let reminders: ReminderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(reminders.display_limit, 2);
        assert_eq!(reminders.month_overflow, MonthOverflow::Clamp);
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("display_limit"));
        assert!(json.contains("\"clamp\""));
    }
}
