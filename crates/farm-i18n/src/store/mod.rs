//! Durable key-value storage for the language preference.
//!
//! The resolver persists exactly one pair, `"language" -> <code>`. Stores are
//! fallible, but the resolver never lets a store error reach its callers: a
//! failed read means "no preference" and a failed write is logged and dropped.

mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key under which the active language code is persisted.
pub const PREFERENCE_KEY: &str = "language";

/// Errors reported by a [`PreferenceStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON object of strings.
    #[error("preference file '{path}' is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Storage is disabled or denied for this session.
    #[error("preference store unavailable: {reason}")]
    Unavailable { reason: String },
}

/// A durable string-to-string preference store.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// A store that refuses every operation.
///
/// Models a session where durable storage is denied; a resolver over it runs
/// on its in-memory state alone.
#[derive(Debug, Clone, Default)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> StoreError {
        StoreError::Unavailable {
            reason: self.reason.clone(),
        }
    }
}

impl PreferenceStore for UnavailableStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(self.error())
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(self.error())
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(self.error())
    }
}
