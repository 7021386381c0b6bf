//! Application configuration.
//!
//! Every field has a default so a partial (or missing) config file is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::{AppError, Result};

/// Finest sampling resolution the display is designed for.
pub const MAX_TICK_MS: u64 = 10;

/// Timer sampling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Interval between elapsed-time samples in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

const fn default_tick_ms() -> u64 {
    MAX_TICK_MS
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Format of the lap summary printed on quit: text, table or json.
    #[serde(default = "default_summary")]
    pub summary: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            summary: default_summary(),
        }
    }
}

fn default_summary() -> String {
    "text".to_string()
}

/// Path configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Base data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub timer: TimerConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub paths: PathConfig,
}

impl AppConfig {
    /// Get the data directory, using default if not configured.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.paths
            .data_dir
            .clone()
            .unwrap_or_else(Self::default_data_dir)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lapwatch")
    }

    /// Get the preference store path.
    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir().join("preferences.toml")
    }

    /// Sampling period, checked against the supported resolution.
    ///
    /// # Errors
    /// Returns a config error if the period is zero or coarser than 10ms.
    pub fn tick_period(&self) -> Result<std::time::Duration> {
        let ms = self.timer.tick_ms;
        if ms == 0 || ms > MAX_TICK_MS {
            return Err(AppError::config(format!(
                "tick_ms must be between 1 and {MAX_TICK_MS}, got {ms}"
            )));
        }
        Ok(std::time::Duration::from_millis(ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.timer.tick_ms, 10);
        assert_eq!(config.display.summary, "text");
        assert!(config.paths.data_dir.is_none());
    }

    #[test]
    fn test_paths_follow_data_dir() {
        let mut config = AppConfig::default();
        config.paths.data_dir = Some(PathBuf::from("/tmp/lw"));
        assert_eq!(
            config.preferences_path(),
            PathBuf::from("/tmp/lw/preferences.toml")
        );
    }

    #[test]
    fn test_tick_period_bounds() {
        let mut config = AppConfig::default();
        assert_eq!(
            config.tick_period().unwrap(),
            std::time::Duration::from_millis(10)
        );

        config.timer.tick_ms = 1;
        assert!(config.tick_period().is_ok());

        config.timer.tick_ms = 0;
        assert!(config.tick_period().is_err());

        config.timer.tick_ms = 50;
        assert!(config.tick_period().is_err());
    }
}
