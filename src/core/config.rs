//! Application settings and property-name mapping
//!
//! Both are read from the config directory (`settings.yaml`,
//! `properties.yaml`) with embedded defaults as fallback.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Allowed range of a live control (offset or step) and its default tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleRange {
    pub min: i32,
    pub max: i32,
    pub tick: i32,
}

impl ScaleRange {
    /// Pull a value into `min..=max`; an inverted range collapses to `min`
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max.max(self.min))
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.min > self.max || self.tick < self.min || self.tick > self.max {
            return Err(ConfigError::InvalidSetting {
                key: name.to_string(),
                message: format!(
                    "expected min <= tick <= max, got min={}, tick={}, max={}",
                    self.min, self.tick, self.max
                ),
            });
        }
        Ok(())
    }
}

/// Names of document parameters the application reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameters {
    /// Parameter holding the sheet/plate thickness
    pub thickness: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Restrictions {
    /// Users missing from `users.yaml` may still save results
    pub allow_all_users: bool,

    /// Saving may create document properties that don't exist yet
    pub allow_property_creation: bool,

    /// Show "did you know" messages after saving
    pub enable_information: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Urls {
    pub help: Option<String>,
}

/// Contents of `settings.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub title: String,

    #[serde(default)]
    pub debug: bool,

    /// Decimal places the bounding box is measured with
    pub precision: u32,

    pub offset: ScaleRange,

    pub step: ScaleRange,

    pub parameters: Parameters,

    #[serde(default)]
    pub restrictions: Restrictions,

    /// Modifier template, `%key%` is replaced by the user's field (e.g. "%name% (%id%)")
    pub save_modifier_by: String,

    #[serde(default)]
    pub urls: Urls,
}

impl Settings {
    /// Reject settings the controls cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.offset.validate("offset")?;
        self.step.validate("step")?;
        if self.step.min < 0 {
            return Err(ConfigError::InvalidSetting {
                key: "step".to_string(),
                message: format!("step.min must not be negative, got {}", self.step.min),
            });
        }
        if self.parameters.thickness.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                key: "parameters.thickness".to_string(),
                message: "parameter name must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Document property names used when reading and saving (`properties.yaml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyNames {
    pub base_size: String,
    pub base_size_preset: String,
    pub creator: String,
    pub modifier: String,
    pub process: String,
}

impl PropertyNames {
    pub fn keys(&self) -> [&'static str; 5] {
        ["base_size", "base_size_preset", "creator", "modifier", "process"]
    }

    pub fn values(&self) -> [&str; 5] {
        [
            &self.base_size,
            &self.base_size_preset,
            &self.creator,
            &self.modifier,
            &self.process,
        ]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in self.keys().into_iter().zip(self.values()) {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidSetting {
                    key: format!("properties.{}", key),
                    message: "property name must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Errors raised while locating or reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid setting '{key}': {message}")]
    InvalidSetting { key: String, message: String },

    #[error("Cannot determine a configuration directory. Pass --config-dir or set BASESIZE_CONFIG_DIR")]
    NoConfigDir,

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "basesize")
}

/// Resolve the configuration directory
///
/// An explicit directory (flag or environment) wins over the platform default.
pub fn config_dir(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(dir) => Ok(dir.to_path_buf()),
        None => project_dirs()
            .map(|d| d.config_dir().to_path_buf())
            .ok_or(ConfigError::NoConfigDir),
    }
}

/// Directory for per-user runtime data (usage counter)
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    project_dirs()
        .map(|d| d.data_dir().to_path_buf())
        .ok_or(ConfigError::NoConfigDir)
}
