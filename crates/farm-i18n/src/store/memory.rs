use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::{PreferenceStore, StoreError};

/// In-memory preference store.
///
/// Clones share the same map, so a value saved through one clone is visible
/// through every other. Tests use this to simulate an application restart:
/// hand a clone to a second resolver and it reads what the first one wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single pair.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = MemoryStore::new();
        if let Ok(mut values) = store.values.write() {
            values.insert(key.into(), value.into());
        }
        store
    }

    fn poisoned() -> StoreError {
        StoreError::Unavailable {
            reason: "memory store lock poisoned".to_string(),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.read().map_err(|_| Self::poisoned())?;
        Ok(values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.write().map_err(|_| Self::poisoned())?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut values = self.values.write().map_err(|_| Self::poisoned())?;
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_values() {
        let mut first = MemoryStore::new();
        let second = first.clone();
        first.save("language", "ta").unwrap();
        assert_eq!(second.load("language").unwrap().as_deref(), Some("ta"));
    }

    #[test]
    fn remove_absent_key_succeeds() {
        let mut store = MemoryStore::with_value("language", "hi");
        store.remove("theme").unwrap();
        store.remove("language").unwrap();
        assert_eq!(store.load("language").unwrap(), None);
    }
}
