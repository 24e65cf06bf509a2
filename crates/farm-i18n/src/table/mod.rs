//! Translation tables.
//!
//! This module owns the `Language -> Key -> DisplayString` data: the content
//! bundled with the application, catalog loading with replace semantics, and
//! the validation and coverage reports used by content review.

mod builtin;
mod error;
mod language_table;
mod translations;

pub use error::{LoadError, LoadWarning, compute_suggestions};
pub use language_table::LanguageTable;
pub use translations::{CATALOG_EXTENSION, Coverage, TranslationTable, catalog_path};
