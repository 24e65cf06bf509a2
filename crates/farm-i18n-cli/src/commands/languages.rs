//! Implementation of the `farm-i18n languages` command.

use std::path::Path;

use farm_i18n::{Language, TranslationTable};
use miette::IntoDiagnostic;
use serde::Serialize;

use super::load_table;
use crate::output::table::format_languages_table;

/// Arguments for the languages command.
#[derive(Debug, clap::Args)]
pub struct LanguagesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one supported language.
#[derive(Debug, Serialize)]
struct LanguageJson {
    code: Language,
    name: &'static str,
    native_name: &'static str,
    keys: usize,
    default: bool,
}

fn key_counts(table: &TranslationTable) -> Vec<(Language, usize)> {
    Language::ALL
        .into_iter()
        .map(|language| (language, table.language(language).map_or(0, |t| t.len())))
        .collect()
}

/// Run the languages command.
pub fn run_languages(args: LanguagesArgs, catalogs: Option<&Path>) -> miette::Result<i32> {
    let table = load_table(catalogs)?;
    let rows = key_counts(&table);

    if args.json {
        let json: Vec<LanguageJson> = rows
            .iter()
            .map(|&(language, keys)| LanguageJson {
                code: language,
                name: language.name(),
                native_name: language.native_name(),
                keys,
                default: language == Language::DEFAULT,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else {
        println!("{}", format_languages_table(&rows));
    }

    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_follow_supported_order() {
        let rows = key_counts(&TranslationTable::builtin());
        assert_eq!(rows.len(), Language::ALL.len());
        assert_eq!(rows[0], (Language::En, 22));
        assert!(rows.iter().all(|&(_, keys)| keys == 22));
    }

    #[test]
    fn unloaded_language_counts_zero() {
        let mut table = TranslationTable::new();
        table.load_str(Language::Hi, r#"home = "होम";"#).unwrap();
        let rows = key_counts(&table);
        assert_eq!(rows[0], (Language::En, 0));
        assert_eq!(rows[1], (Language::Hi, 1));
    }
}
