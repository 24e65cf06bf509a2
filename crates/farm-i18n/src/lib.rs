//! Language selection and text lookup for the farm biosecurity UI.
//!
//! Every screen renders its labels through one [`Resolver`]: it owns the active
//! [`Language`], persists it to a [`PreferenceStore`], and resolves symbolic
//! keys against a [`TranslationTable`]. A key the active language does not
//! define resolves to itself, so missing content shows up during review
//! instead of disappearing.
//!
//! ```
//! use farm_i18n::{Language, MemoryStore, Resolver};
//!
//! let store = MemoryStore::new();
//! let mut resolver = Resolver::with_store(store.clone());
//! assert_eq!(resolver.language(), Language::En);
//! assert_eq!(resolver.resolve("home"), "Home");
//!
//! resolver.set_language(Language::Hi);
//!
//! // A new resolver over the same store picks the choice back up.
//! let restarted = Resolver::with_store(store);
//! assert_eq!(restarted.language(), Language::Hi);
//! ```

pub mod parser;
pub mod provider;
pub mod resolver;
pub mod store;
pub mod table;
pub mod types;

pub use provider::{LanguageHandle, LanguageProvider, Subscription};
pub use resolver::{LanguageChange, Resolver, ResolverConfig};
pub use store::{FileStore, MemoryStore, PREFERENCE_KEY, PreferenceStore, StoreError, UnavailableStore};
pub use table::{
    CATALOG_EXTENSION, Coverage, LanguageTable, LoadError, LoadWarning, TranslationTable,
    compute_suggestions,
};
pub use types::{Language, UnsupportedLanguage};
