use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{PreferenceStore, StoreError};

/// Preference store backed by a small JSON object on disk.
///
/// The file holds `{"language": "hi"}` and any other string pairs written
/// through the same store. A missing file reads as an empty store. Writes go
/// to a sibling `.tmp` file that is then renamed over the original.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            source: e,
        })
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let io_error = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let json = serde_json::to_string_pretty(values).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            source: e,
        })?;

        let mut tmp: OsString = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, json).map_err(io_error)?;
        fs::rename(&tmp, &self.path).map_err(io_error)
    }

    /// Current contents for a write. A corrupt file is replaced rather than
    /// blocking every later save.
    fn read_for_update(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match self.read_all() {
            Err(StoreError::Corrupt { .. }) => Ok(BTreeMap::new()),
            other => other,
        }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.read_for_update()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut values = self.read_for_update()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.load("language").unwrap(), None);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let mut store = FileStore::new(&path);
        store.save("language", "mr").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let values: BTreeMap<String, String> = serde_json::from_str(&written).unwrap();
        assert_eq!(values.get("language").map(String::as_str), Some("mr"));
        assert!(!dir.path().join("nested").join("prefs.json.tmp").exists());
    }

    #[test]
    fn save_keeps_other_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

        let mut store = FileStore::new(&path);
        store.save("language", "gu").unwrap();
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.load("language").unwrap().as_deref(), Some("gu"));
    }

    #[test]
    fn corrupt_file_is_reported_on_load_and_replaced_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(
            store.load("language"),
            Err(StoreError::Corrupt { .. })
        ));

        store.save("language", "kn").unwrap();
        assert_eq!(store.load("language").unwrap().as_deref(), Some("kn"));
    }
}
