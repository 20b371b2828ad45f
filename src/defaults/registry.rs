//! Default registry - embedded fallback configuration files

use rust_embed::Embed;
use std::collections::HashMap;

#[derive(Embed)]
#[folder = "resources/"]
struct EmbeddedDefaults;

/// Configuration files read from the config directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFile {
    Settings,
    Presets,
    Processes,
    Properties,
    Users,
    Information,
}

impl ConfigFile {
    pub fn all() -> &'static [ConfigFile] {
        &[
            ConfigFile::Settings,
            ConfigFile::Presets,
            ConfigFile::Processes,
            ConfigFile::Properties,
            ConfigFile::Users,
            ConfigFile::Information,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFile::Settings => "settings",
            ConfigFile::Presets => "presets",
            ConfigFile::Processes => "processes",
            ConfigFile::Properties => "properties",
            ConfigFile::Users => "users",
            ConfigFile::Information => "information",
        }
    }

    /// File name inside the config directory (e.g. "presets.yaml")
    pub fn file_name(&self) -> String {
        format!("{}.yaml", self.as_str())
    }

    /// Name of the embedded fallback (e.g. "presets.default.yaml")
    pub fn default_name(&self) -> String {
        format!("{}.default.yaml", self.as_str())
    }
}

/// Registry of embedded default configuration files
pub struct DefaultRegistry {
    files: HashMap<ConfigFile, String>,
}

impl DefaultRegistry {
    /// Create a new registry with the embedded defaults
    pub fn new() -> Self {
        let mut files = HashMap::new();

        for kind in ConfigFile::all() {
            if let Some(file) = EmbeddedDefaults::get(&kind.default_name()) {
                if let Ok(content) = std::str::from_utf8(&file.data) {
                    files.insert(*kind, content.to_string());
                }
            }
        }

        Self { files }
    }

    /// Get the default content of a config file
    pub fn get(&self, kind: ConfigFile) -> Option<&str> {
        self.files.get(&kind).map(|s| s.as_str())
    }

    /// Check if a default exists for the given file
    pub fn has_default(&self, kind: ConfigFile) -> bool {
        self.files.contains_key(&kind)
    }
}

impl Default for DefaultRegistry {
    fn default() -> Self {
        Self::new()
    }
}
