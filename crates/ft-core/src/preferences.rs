//! Key-value preferences that outlive the process.
//!
//! The application keeps exactly one value here (the remembered login
//! email), but the store is a plain string map so the seam stays small.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::PreferenceError;

/// Storage for persisted string preferences.
///
/// A missing key is "no value", never an error.
pub trait PreferenceStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), PreferenceError>;
}

// =============================================================================
// FILE STORE
// =============================================================================

/// Preferences persisted as a flat TOML table.
///
/// The whole table is rewritten on every change.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Open the store at `path`.
    ///
    /// A missing file starts empty. An unreadable or malformed file also
    /// starts empty (logged) and is overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), error = %err, "Ignoring malformed preferences");
                BTreeMap::new()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Could not read preferences");
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PreferenceError::Io {
                operation: "create",
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string(&self.values)
            .map_err(|source| PreferenceError::Encode { source })?;

        std::fs::write(&self.path, content).map_err(|source| PreferenceError::Io {
            operation: "write",
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferenceError> {
        if self.values.remove(key).is_none() {
            return Ok(());
        }
        self.flush()
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// Preferences that live only as long as the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferenceError> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs").join("preferences.toml");

        let mut store = FilePreferences::open(&path);
        assert_eq!(store.get("remembered_email"), None);
        store
            .put("remembered_email", "a@b.com")
            .expect("write preference");

        let reopened = FilePreferences::open(&path);
        assert_eq!(reopened.get("remembered_email").as_deref(), Some("a@b.com"));
    }

    #[test]
    fn remove_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.toml");

        let mut store = FilePreferences::open(&path);
        store.put("remembered_email", "a@b.com").expect("put");
        store.remove("remembered_email").expect("remove");
        store.remove("remembered_email").expect("remove twice");

        assert_eq!(FilePreferences::open(&path).get("remembered_email"), None);
    }

    #[test]
    fn malformed_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "not = [valid").expect("write");

        let mut store = FilePreferences::open(&path);
        assert_eq!(store.get("not"), None);
        store.put("remembered_email", "x@y.io").expect("overwrite");
        assert_eq!(
            FilePreferences::open(&path).get("remembered_email").as_deref(),
            Some("x@y.io")
        );
    }
}
