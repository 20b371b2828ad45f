//! Per-user runtime data: the usage counter

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// File name inside the data directory
const APPDATA_FILE: &str = "appdata.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppData {
    /// Version that last wrote the file
    pub version: String,

    /// Number of saved results so far
    pub counter: u64,

    pub disable_volume_warning: bool,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            counter: 0,
            disable_volume_warning: false,
        }
    }
}

/// Location of the app data file
pub struct AppDataStore {
    path: PathBuf,
}

impl AppDataStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(APPDATA_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored data; a missing or corrupt file yields defaults
    pub fn load(&self) -> AppData {
        if !self.path.exists() {
            return AppData::default();
        }
        match fs::read_to_string(&self.path)
            .map_err(|e| e.to_string())
            .and_then(|c| serde_json::from_str::<AppData>(&c).map_err(|e| e.to_string()))
        {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %self.path.display(), error = e.as_str(), "App data file is corrupt, starting over");
                AppData::default()
            }
        }
    }

    pub fn save(&self, data: &AppData) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, content)
    }

    /// Count one more use and persist it, returning the new counter
    pub fn bump(&self) -> std::io::Result<u64> {
        let mut data = self.load();
        data.version = env!("CARGO_PKG_VERSION").to_string();
        data.counter += 1;
        self.save(&data)?;
        Ok(data.counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_counts_up() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = AppDataStore::new(tmp.path());
        assert_eq!(store.load().counter, 0);
        assert_eq!(store.bump().unwrap(), 1);
        assert_eq!(store.bump().unwrap(), 2);
        assert_eq!(store.load().counter, 2);
    }

    #[test]
    fn test_corrupt_file_resets() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = AppDataStore::new(tmp.path());
        fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.load(), AppData::default());
        assert_eq!(store.bump().unwrap(), 1);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = AppDataStore::new(tmp.path());
        fs::write(store.path(), r#"{"counter": 7}"#).unwrap();
        let data = store.load();
        assert_eq!(data.counter, 7);
        assert!(!data.disable_volume_warning);
    }
}
