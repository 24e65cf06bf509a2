//! Key to display-text map for a single language.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::Path;

use crate::parser::CatalogEntry;
use crate::table::error::{LoadError, compute_suggestions};

/// The strings of one language, indexed by key.
///
/// Keys are unique; presence is the only lookup criterion, so an empty string
/// is a real translation and never treated as missing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    entries: BTreeMap<String, String>,
}

impl LanguageTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from parsed catalog entries, rejecting duplicate keys.
    ///
    /// `path` is only used to label errors.
    pub fn from_entries(entries: Vec<CatalogEntry>, path: &Path) -> Result<Self, LoadError> {
        let mut table = LanguageTable::new();
        let mut lines: BTreeMap<String, usize> = BTreeMap::new();
        for entry in entries {
            match lines.entry(entry.key) {
                Entry::Occupied(first) => {
                    return Err(LoadError::DuplicateKey {
                        path: path.to_path_buf(),
                        key: first.key().clone(),
                        line: entry.line,
                        first_line: *first.get(),
                    });
                }
                Entry::Vacant(slot) => {
                    table.entries.insert(slot.key().clone(), entry.text);
                    slot.insert(entry.line);
                }
            }
        }
        Ok(table)
    }

    /// Get the text for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the key is present, regardless of its text.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or replace the text for a key, returning the previous text.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), text.into())
    }

    /// Iterate over keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(key, text)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys close to `key` by edit distance, for "did you mean" output.
    pub fn suggestions(&self, key: &str) -> Vec<String> {
        compute_suggestions(key, self.keys())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LanguageTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        LanguageTable {
            entries: iter
                .into_iter()
                .map(|(key, text)| (key.into(), text.into()))
                .collect(),
        }
    }
}
