//! Application configuration.
//!
//! Settings live in a small TOML file in the platform config directory.
//! A missing file yields defaults (and a fresh file is written); a malformed
//! file is logged and ignored so the calendar always starts.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::color::EventColor;

const CONFIG_FILE_NAME: &str = "config.toml";
const DATABASE_FILE_NAME: &str = "events.db";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Explicit database location; platform default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
    pub theme: ThemeChoice,
    /// 0 = Sunday .. 6 = Saturday
    pub first_day_of_week: u8,
    pub default_event_color: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            theme: ThemeChoice::Light,
            first_day_of_week: 0,
            default_event_color: EventColor::default().to_hex(),
            window_width: 900.0,
            window_height: 650.0,
        }
    }
}

impl AppConfig {
    /// Load from the platform config file, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_file() else {
            log::warn!("No platform config directory available, using default settings");
            return Self::default();
        };

        if !path.exists() {
            let config = Self::default();
            match config.save_to(&path) {
                Ok(()) => log::info!("Wrote default config to {}", path.display()),
                Err(e) => log::warn!("Could not write default config: {}", e),
            }
            return config;
        }

        match Self::load_from(&path) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    /// Load from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first_day_of_week > 6 {
            return Err(ConfigError::Invalid(format!(
                "first_day_of_week must be 0-6, got {}",
                self.first_day_of_week
            )));
        }
        if EventColor::from_hex(&self.default_event_color).is_none() {
            return Err(ConfigError::Invalid(format!(
                "default_event_color '{}' is not a hex color",
                self.default_event_color
            )));
        }
        if self.window_width < 320.0 || self.window_height < 240.0 {
            return Err(ConfigError::Invalid(format!(
                "window size {}x{} is too small",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }

    /// Reset any field that fails validation to its default.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.first_day_of_week > 6 {
            log::warn!(
                "Ignoring first_day_of_week={} from config",
                self.first_day_of_week
            );
            self.first_day_of_week = defaults.first_day_of_week;
        }
        if EventColor::from_hex(&self.default_event_color).is_none() {
            log::warn!(
                "Ignoring default_event_color='{}' from config",
                self.default_event_color
            );
            self.default_event_color = defaults.default_event_color;
        }
        if self.window_width < 320.0 || self.window_height < 240.0 {
            self.window_width = defaults.window_width;
            self.window_height = defaults.window_height;
        }
        self
    }

    pub fn default_color(&self) -> EventColor {
        EventColor::from_hex(&self.default_event_color).unwrap_or_default()
    }

    pub fn config_file() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Where the events database lives for this run.
    pub fn resolve_database_path(&self) -> PathBuf {
        if let Some(path) = &self.database_path {
            return path.clone();
        }
        default_database_path()
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "EventScheduler", "EventScheduler")
}

#[cfg(debug_assertions)]
fn default_database_path() -> PathBuf {
    PathBuf::from(DATABASE_FILE_NAME)
}

#[cfg(not(debug_assertions))]
fn default_database_path() -> PathBuf {
    let Some(dirs) = project_dirs() else {
        return PathBuf::from(DATABASE_FILE_NAME);
    };

    let data_dir = dirs.data_dir();
    if let Err(e) = fs::create_dir_all(data_dir) {
        log::warn!(
            "Failed to create data directory {}: {}",
            data_dir.display(),
            e
        );
        return PathBuf::from(DATABASE_FILE_NAME);
    }
    data_dir.join(DATABASE_FILE_NAME)
}
