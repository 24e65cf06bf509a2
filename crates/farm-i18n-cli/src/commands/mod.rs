//! CLI command implementations.

mod check;
mod coverage;
mod languages;
mod preference;
mod resolve;

use std::path::Path;

use farm_i18n::TranslationTable;
use miette::miette;
use tracing::info;

use crate::output::CatalogDiagnostic;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use languages::{run_languages, LanguagesArgs};
pub use preference::{run_preference, PreferenceArgs};
pub use resolve::{run_resolve, ResolveArgs};

/// The built-in table, overlaid with catalogs from `catalogs` when given.
pub fn load_table(catalogs: Option<&Path>) -> miette::Result<TranslationTable> {
    let mut table = TranslationTable::builtin();
    let Some(dir) = catalogs else {
        return Ok(table);
    };

    match table.load_dir(dir) {
        Ok(loaded) => {
            let codes: Vec<&str> = loaded.iter().map(|l| l.code()).collect();
            info!(dir = %dir.display(), languages = ?codes, "loaded catalogs");
            Ok(table)
        }
        Err(e) => match CatalogDiagnostic::from_load_error(&e) {
            Some(diagnostic) => Err(diagnostic.into()),
            None => Err(miette!("{e}")),
        },
    }
}
