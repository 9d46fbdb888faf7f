use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{
    registry,
    timefmt::{DEFAULT_CORRECTION_HOURS, Locale, TimeFormatter},
};

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// City selected automatically when the panel mounts.
    pub default_city: String,

    /// Fixed number of hours added to the wall clock before timezone
    /// formatting. Inherited from the original deployment and suspected to
    /// compensate for one specific host clock; kept as a setting so it can
    /// be corrected without a release.
    pub utc_offset_correction_hours: i64,

    /// Display locale for formatted times.
    pub locale: Locale,

    /// Override for the forecast service base URL.
    pub forecast_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_city: registry::DEFAULT_CITY.to_string(),
            utc_offset_correction_hours: DEFAULT_CORRECTION_HOURS,
            locale: Locale::default(),
            forecast_url: None,
        }
    }
}

impl Config {
    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "cityweather", "cityweather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Formatter configured with this config's correction and locale.
    pub fn formatter(&self) -> TimeFormatter {
        TimeFormatter::new(self.utc_offset_correction_hours, self.locale)
    }
}
