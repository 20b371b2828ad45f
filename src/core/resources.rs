//! Loaded configuration bundle
//!
//! Every file of the config directory is read once into [`Resources`], which
//! is then passed around read-only. Files that don't exist fall back to the
//! embedded defaults; files that exist but are malformed fail the load.

use miette::Diagnostic;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::catalog::{CatalogError, PresetCatalog};
use crate::core::config::{ConfigError, PropertyNames, Settings};
use crate::core::users::UserTable;
use crate::defaults::{ConfigFile, DefaultRegistry};
use crate::entities::{Info, Preset, Process, User};
use crate::yaml::{parse_yaml, YamlError};

/// Errors raised while loading the configuration bundle
#[derive(Debug, Error, Diagnostic)]
pub enum ResourceError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlError),

    #[error("{file}: {source}")]
    #[diagnostic(code(basesize::config::catalog))]
    Catalog {
        file: String,
        #[source]
        source: CatalogError,
    },

    #[error("{file}: {source}")]
    #[diagnostic(code(basesize::config::invalid))]
    Config {
        file: String,
        #[source]
        source: ConfigError,
    },

    #[error("No embedded default for {0}")]
    #[diagnostic(code(basesize::config::missing))]
    MissingDefault(String),
}

/// Where a configuration file was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Embedded,
    Empty,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Embedded => write!(f, "(built-in default)"),
            Source::Empty => write!(f, "(none)"),
        }
    }
}

/// All configuration the application works with
#[derive(Debug, Clone)]
pub struct Resources {
    pub settings: Settings,
    pub props: PropertyNames,
    pub presets: PresetCatalog,
    pub processes: Vec<Process>,
    pub users: UserTable,
    pub infos: Vec<Info>,
    sources: Vec<(ConfigFile, Source)>,
}

impl Resources {
    /// Load the configuration from a directory
    pub fn load(dir: &Path) -> Result<Self, ResourceError> {
        info!(dir = %dir.display(), "Loading configuration");
        Self::load_with(|kind| {
            let path = dir.join(kind.file_name());
            if path.exists() {
                let content = std::fs::read_to_string(&path).map_err(YamlError::from)?;
                Ok(Some((content, Source::File(path))))
            } else {
                Ok(None)
            }
        })
    }

    /// Configuration made of the embedded defaults only
    pub fn embedded() -> Result<Self, ResourceError> {
        Self::load_with(|_| Ok(None))
    }

    fn load_with<F>(mut read: F) -> Result<Self, ResourceError>
    where
        F: FnMut(ConfigFile) -> Result<Option<(String, Source)>, ResourceError>,
    {
        let registry = DefaultRegistry::new();
        let mut sources = Vec::new();

        let mut load = |kind: ConfigFile| -> Result<Option<(String, String)>, ResourceError> {
            let (content, source) = match read(kind)? {
                Some(found) => found,
                None => match registry.get(kind) {
                    Some(content) => (content.to_string(), Source::Embedded),
                    None => {
                        sources.push((kind, Source::Empty));
                        return Ok(None);
                    }
                },
            };
            debug!(file = kind.as_str(), source = %source, "Reading configuration file");
            let name = match &source {
                Source::File(path) => path.display().to_string(),
                _ => kind.default_name(),
            };
            sources.push((kind, source));
            Ok(Some((content, name)))
        };

        let settings: Settings = required(load(ConfigFile::Settings)?, ConfigFile::Settings)?;
        let props: PropertyNames = required(load(ConfigFile::Properties)?, ConfigFile::Properties)?;
        let presets: Vec<Preset> = required(load(ConfigFile::Presets)?, ConfigFile::Presets)?;
        let processes: Vec<Process> = optional(load(ConfigFile::Processes)?)?;
        let users: Vec<User> = optional(load(ConfigFile::Users)?)?;
        let infos: Vec<Info> = optional(load(ConfigFile::Information)?)?;
        drop(load);

        let config_err = |kind: ConfigFile| {
            move |source: ConfigError| ResourceError::Config {
                file: kind.file_name(),
                source,
            }
        };

        settings.validate().map_err(config_err(ConfigFile::Settings))?;
        props.validate().map_err(config_err(ConfigFile::Properties))?;
        let presets = PresetCatalog::new(presets).map_err(|source| ResourceError::Catalog {
            file: ConfigFile::Presets.file_name(),
            source,
        })?;
        let users = UserTable::new(users).map_err(config_err(ConfigFile::Users))?;

        Ok(Self {
            settings,
            props,
            presets,
            processes,
            users,
            infos,
            sources,
        })
    }

    /// Where each file was read from
    pub fn sources(&self) -> &[(ConfigFile, Source)] {
        &self.sources
    }

    pub fn process_exists(&self, name: &str) -> bool {
        self.get_process_by_name(name).is_some()
    }

    pub fn get_process_by_name(&self, name: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.name == name)
    }

    /// Information messages due at a usage count
    pub fn info_messages(&self, counter: u64) -> Vec<&str> {
        crate::entities::info::messages_for(&self.infos, counter)
    }
}

fn required<T: DeserializeOwned + 'static>(
    loaded: Option<(String, String)>,
    kind: ConfigFile,
) -> Result<T, ResourceError> {
    let (content, name) = loaded.ok_or_else(|| ResourceError::MissingDefault(kind.file_name()))?;
    Ok(parse_yaml(&content, &name)?)
}

fn optional<T: DeserializeOwned + 'static>(loaded: Option<(String, String)>) -> Result<Vec<T>, ResourceError> {
    match loaded {
        Some((content, name)) => {
            // an empty file means an empty list
            if content.trim().is_empty() {
                return Ok(Vec::new());
            }
            Ok(parse_yaml(&content, &name)?)
        }
        None => Ok(Vec::new()),
    }
}
