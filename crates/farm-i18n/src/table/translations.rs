//! The two-level `Language -> Key -> DisplayString` table.
//!
//! A table is assembled once at startup, from the built-in content and
//! optionally from catalog files, and then shared read-only with the resolver.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::parser::{ParseError, parse_catalog};
use crate::table::builtin;
use crate::table::error::{LoadError, LoadWarning};
use crate::table::language_table::LanguageTable;
use crate::types::Language;

/// File extension of catalog files, e.g. `hi.i18n`.
pub const CATALOG_EXTENSION: &str = "i18n";

/// Translations for every loaded language.
///
/// Sub-maps are independent: languages may carry different key sets, and
/// loading a language replaces its sub-map wholesale.
///
/// # Example
///
/// ```
/// use farm_i18n::{Language, TranslationTable};
///
/// let mut table = TranslationTable::new();
/// table.load_str(Language::Hi, r#"home = "होम";"#).unwrap();
///
/// assert_eq!(table.lookup(Language::Hi, "home"), Some("होम"));
/// assert_eq!(table.lookup(Language::En, "home"), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct TranslationTable {
    languages: BTreeMap<Language, LanguageTable>,

    /// File paths for reload support. Only populated for file-loaded catalogs.
    loaded_paths: BTreeMap<Language, PathBuf>,
}

/// How much of the base language's key set another language covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub language: Language,
    /// Base keys present in this language.
    pub translated: usize,
    /// Size of the base key set.
    pub total: usize,
    /// Base keys absent from this language, sorted.
    pub missing: Vec<String>,
}

impl Coverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl TranslationTable {
    /// Create a table with no languages.
    pub fn new() -> Self {
        Self::default()
    }

    /// The content bundled with the application: 8 languages.
    pub fn builtin() -> Self {
        let mut table = TranslationTable::new();
        for language in Language::ALL {
            let entries = builtin::entries(language);
            table
                .languages
                .insert(language, entries.iter().copied().collect());
        }
        table
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// The sub-map for a language, if one was loaded.
    pub fn language(&self, language: Language) -> Option<&LanguageTable> {
        self.languages.get(&language)
    }

    /// Languages with a sub-map, in `Language` order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.languages.keys().copied()
    }

    /// Typed two-level lookup with no fallback.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.languages
            .get(&language)
            .and_then(|table| table.get(key))
    }

    /// Insert or replace a single string.
    pub fn insert(
        &mut self,
        language: Language,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Option<String> {
        self.languages
            .entry(language)
            .or_default()
            .insert(key, text)
    }

    /// Replace a language's sub-map.
    pub fn set_language_table(&mut self, language: Language, table: LanguageTable) {
        self.loaded_paths.remove(&language);
        self.languages.insert(language, table);
    }

    // =========================================================================
    // Catalog Loading
    // =========================================================================

    /// Load a catalog from a string, replacing the language's sub-map.
    ///
    /// Returns the number of entries loaded. On error the existing sub-map is
    /// left untouched.
    pub fn load_str(&mut self, language: Language, content: &str) -> Result<usize, LoadError> {
        let label = PathBuf::from(format!("<{language}>"));
        let table = parse_language_table(content, &label)?;
        let count = table.len();
        self.set_language_table(language, table);
        debug!(%language, count, "loaded catalog from string");
        Ok(count)
    }

    /// Load a catalog file, replacing the language's sub-map.
    ///
    /// The path is remembered for [`TranslationTable::reload`].
    pub fn load_file(&mut self, language: Language, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let content = String::from_utf8(bytes)
            .map_err(|_| LoadError::from_parse(path.to_path_buf(), ParseError::InvalidUtf8))?;

        let table = parse_language_table(&content, path)?;
        let count = table.len();
        self.languages.insert(language, table);
        self.loaded_paths.insert(language, path.to_path_buf());
        debug!(%language, count, path = %path.display(), "loaded catalog");
        Ok(count)
    }

    /// Re-read a language's catalog from the file it was loaded from.
    pub fn reload(&mut self, language: Language) -> Result<usize, LoadError> {
        let path = self
            .loaded_paths
            .get(&language)
            .cloned()
            .ok_or(LoadError::NoPathForReload { language })?;
        self.load_file(language, path)
    }

    /// Load every `<code>.i18n` catalog in `dir` whose code is supported.
    ///
    /// Languages without a file keep their current sub-map. Returns the
    /// languages that were loaded.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<Vec<Language>, LoadError> {
        let dir = dir.as_ref();
        fs::metadata(dir).map_err(|e| LoadError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let mut loaded = Vec::new();
        for language in Language::ALL {
            let path = catalog_path(dir, language);
            if path.is_file() {
                self.load_file(language, &path)?;
                loaded.push(language);
            }
        }
        Ok(loaded)
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Compare `target` against `base`.
    ///
    /// Reports keys the base language does not define and empty translations,
    /// in key order. Returns an empty vector if either language is not loaded.
    pub fn validate(&self, base: Language, target: Language) -> Vec<LoadWarning> {
        let mut warnings = Vec::new();

        let Some(base_table) = self.languages.get(&base) else {
            return warnings;
        };
        let Some(target_table) = self.languages.get(&target) else {
            return warnings;
        };

        for (key, text) in target_table.iter() {
            if !base_table.contains(key) {
                warnings.push(LoadWarning::UnknownKey {
                    key: key.to_string(),
                    language: target,
                });
            }
            if text.is_empty() {
                warnings.push(LoadWarning::EmptyTranslation {
                    key: key.to_string(),
                    language: target,
                });
            }
        }

        warnings
    }

    /// Coverage of every supported language against the base key set.
    ///
    /// Languages with no sub-map report every base key as missing.
    pub fn coverage(&self, base: Language) -> Vec<Coverage> {
        let base_keys: Vec<&str> = self
            .languages
            .get(&base)
            .map(|table| table.keys().collect())
            .unwrap_or_default();

        Language::ALL
            .into_iter()
            .map(|language| {
                let table = self.languages.get(&language);
                let missing: Vec<String> = base_keys
                    .iter()
                    .filter(|key| !table.is_some_and(|t| t.contains(key)))
                    .map(|key| (*key).to_string())
                    .collect();
                Coverage {
                    language,
                    translated: base_keys.len() - missing.len(),
                    total: base_keys.len(),
                    missing,
                }
            })
            .collect()
    }
}

/// Path of a language's catalog inside `dir`.
pub fn catalog_path(dir: &Path, language: Language) -> PathBuf {
    dir.join(format!("{}.{CATALOG_EXTENSION}", language.code()))
}

fn parse_language_table(content: &str, path: &Path) -> Result<LanguageTable, LoadError> {
    let entries =
        parse_catalog(content).map_err(|e| LoadError::from_parse(path.to_path_buf(), e))?;
    LanguageTable::from_entries(entries, path)
}
