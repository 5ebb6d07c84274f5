// src/localization/storage.rs
use crate::core::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Durable string slots keyed by a namespace identifier.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn store(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Lives for the session only.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.into(), value.into());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.into(), value.into());
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default)]
    preferences: BTreeMap<String, String>,
}

/// Preferences kept in a small TOML file:
///
/// ```toml
/// [preferences]
/// pahtia-language = "fr"
/// ```
///
/// Writes are synchronous so a language change is on disk before the
/// triggering event returns.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<PreferenceFile> {
        if !self.path.exists() {
            return Ok(PreferenceFile::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(AppError::Io)?;
        toml::from_str(&content).map_err(|e| {
            AppError::Storage(format!("{}: {}", self.path.display(), e))
        })
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_file()?.preferences.get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        // an unreadable file is replaced rather than blocking the write
        let mut file = self.read_file().unwrap_or_else(|e| {
            log::warn!("Discarding unreadable preference file: {}", e);
            PreferenceFile::default()
        });
        file.preferences.insert(key.into(), value.into());

        let content = toml::to_string_pretty(&file)
            .map_err(|e| AppError::Storage(format!("TOML: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(AppError::Io)?;
            }
        }

        std::fs::write(&self.path, content).map_err(AppError::Io)?;
        log::debug!("Preference '{}' = '{}' saved to {}", key, value, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("pahtia-language").unwrap(), None);

        store.store("pahtia-language", "fr").unwrap();
        assert_eq!(store.load("pahtia-language").unwrap().as_deref(), Some("fr"));
    }

    #[test]
    fn file_store_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("prefs.toml"));
        assert_eq!(store.load("pahtia-language").unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/prefs.toml");

        FileStore::new(&path).store("pahtia-language", "es").unwrap();
        FileStore::new(&path).store("other", "x").unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.load("pahtia-language").unwrap().as_deref(), Some("es"));
        assert_eq!(store.load("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn file_store_reports_corrupt_file_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "preferences = [[[").unwrap();

        let err = FileStore::new(&path).load("pahtia-language").unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[test]
    fn file_store_overwrites_corrupt_file_on_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "preferences = [[[").unwrap();

        let mut store = FileStore::new(&path);
        store.store("pahtia-language", "fr").unwrap();
        assert_eq!(store.load("pahtia-language").unwrap().as_deref(), Some("fr"));
    }
}
