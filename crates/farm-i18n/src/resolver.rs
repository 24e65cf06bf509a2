//! The localization resolver.
//!
//! A [`ResolverConfig`] describes a resolver that has not read the preference
//! store yet. [`ResolverConfig::initialize`] performs the one startup read and
//! yields a ready [`Resolver`], which owns the active language from then on.

use std::mem;
use std::sync::Arc;

use bon::Builder;
use tracing::{debug, info, warn};

use crate::store::{MemoryStore, PREFERENCE_KEY, PreferenceStore};
use crate::table::TranslationTable;
use crate::types::{Language, UnsupportedLanguage};

/// Startup configuration for a [`Resolver`].
///
/// # Example
///
/// ```
/// use farm_i18n::{Language, MemoryStore, ResolverConfig};
///
/// let store = MemoryStore::with_value("language", "bn");
/// let resolver = ResolverConfig::builder()
///     .store(Box::new(store))
///     .build()
///     .initialize();
///
/// assert_eq!(resolver.language(), Language::Bn);
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct ResolverConfig {
    /// Translation content. Defaults to the built-in table.
    #[builder(default = Arc::new(TranslationTable::builtin()))]
    table: Arc<TranslationTable>,

    /// Where the active language is persisted. Defaults to a fresh
    /// [`MemoryStore`], i.e. no persistence across processes.
    #[builder(default = Box::new(MemoryStore::new()) as Box<dyn PreferenceStore>)]
    store: Box<dyn PreferenceStore>,

    /// Adopted when the store holds no valid preference.
    #[builder(default)]
    default_language: Language,

    /// Store key for the persisted language code.
    #[builder(default = PREFERENCE_KEY.to_string())]
    preference_key: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig::builder().build()
    }
}

impl ResolverConfig {
    /// Read the persisted preference and produce a ready resolver.
    ///
    /// A stored value is adopted only if it is exactly a supported code.
    /// Anything else, including a store that cannot be read, yields the
    /// configured default language.
    pub fn initialize(self) -> Resolver {
        let active = read_preference(self.store.as_ref(), &self.preference_key)
            .unwrap_or(self.default_language);
        debug!(language = %active, "resolver initialized");
        Resolver {
            table: self.table,
            store: self.store,
            preference_key: self.preference_key,
            active,
        }
    }
}

fn read_preference(store: &dyn PreferenceStore, key: &str) -> Option<Language> {
    match store.load(key) {
        Ok(Some(code)) => {
            let language = Language::from_code(&code);
            match language {
                Some(language) => debug!(%language, "adopted persisted language"),
                None => warn!(%code, "ignoring unsupported persisted language"),
            }
            language
        }
        Ok(None) => None,
        Err(e) => {
            warn!(error = %e, "could not read language preference, using default");
            None
        }
    }
}

/// Outcome of a request to change the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageChange {
    /// The active language moved from `previous` to `current`.
    Changed {
        previous: Language,
        current: Language,
    },
    /// The requested language was already active; nothing happened.
    Unchanged(Language),
}

impl LanguageChange {
    pub fn is_changed(&self) -> bool {
        matches!(self, LanguageChange::Changed { .. })
    }

    /// The active language after the request.
    pub fn current(&self) -> Language {
        match *self {
            LanguageChange::Changed { current, .. } | LanguageChange::Unchanged(current) => current,
        }
    }
}

/// Owns the active language and resolves keys against it.
///
/// Lookups never fail. A key missing from the active language resolves to the
/// key itself, so untranslated content is visible rather than blank, and is
/// never filled in from another language.
///
/// # Example
///
/// ```
/// use farm_i18n::{Language, Resolver};
///
/// let mut resolver = Resolver::new();
/// assert_eq!(resolver.resolve("home"), "Home");
///
/// resolver.set_language(Language::Hi);
/// assert_eq!(resolver.resolve("home"), "होम");
/// assert_eq!(resolver.resolve("doesNotExist"), "doesNotExist");
/// ```
pub struct Resolver {
    table: Arc<TranslationTable>,
    store: Box<dyn PreferenceStore>,
    preference_key: String,
    active: Language,
}

impl Default for Resolver {
    fn default() -> Self {
        ResolverConfig::default().initialize()
    }
}

impl Resolver {
    /// A resolver over the built-in table with an in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver over the built-in table, initialized from `store`.
    pub fn with_store(store: impl PreferenceStore + 'static) -> Self {
        ResolverConfig::builder()
            .store(Box::new(store))
            .build()
            .initialize()
    }

    // =========================================================================
    // Language Management
    // =========================================================================

    /// The active language.
    pub fn language(&self) -> Language {
        self.active
    }

    /// Make `language` active and persist it.
    ///
    /// The choice is written even when `language` is already active, so a
    /// store left stale by a failed startup read is overwritten. A failed
    /// write is logged and otherwise ignored; the change still takes effect
    /// for this session.
    pub fn set_language(&mut self, language: Language) -> LanguageChange {
        if language == self.active {
            self.persist();
            return LanguageChange::Unchanged(language);
        }

        let previous = mem::replace(&mut self.active, language);
        info!(%previous, %language, "language changed");
        self.persist();
        LanguageChange::Changed {
            previous,
            current: language,
        }
    }

    /// Make the language named by `code` active.
    ///
    /// An unsupported code is rejected and the active language is kept.
    pub fn set_language_code(&mut self, code: &str) -> Result<LanguageChange, UnsupportedLanguage> {
        match code.parse::<Language>() {
            Ok(language) => Ok(self.set_language(language)),
            Err(e) => {
                warn!(code, active = %self.active, "rejected unsupported language code");
                Err(e)
            }
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.preference_key, self.active.code()) {
            warn!(error = %e, language = %self.active, "failed to persist language preference");
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Display text for `key` in the active language, or `key` itself.
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.resolve_in(self.active, key)
    }

    /// Display text for `key` in `language`, or `key` itself.
    pub fn resolve_in<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        match self.table.lookup(language, key) {
            Some(text) => text,
            None => {
                debug!(%language, key, "missing translation");
                key
            }
        }
    }

    /// Display text for `key` in the active language, without fallback.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.table.lookup(self.active, key)
    }

    /// Keys of the active language that look like `key`.
    pub fn suggestions(&self, key: &str) -> Vec<String> {
        self.table
            .language(self.active)
            .map(|table| table.suggestions(key))
            .unwrap_or_default()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The translation table (read-only).
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Store key under which the active language is persisted.
    pub fn preference_key(&self) -> &str {
        &self.preference_key
    }
}
