//! Coverage command implementation.

use std::path::Path;

use clap::Args;
use farm_i18n::{Coverage, Language, LoadWarning, TranslationTable};
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::load_table;
use crate::output::table::format_coverage_table;

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Language whose key set defines full coverage.
    #[arg(long, default_value_t = Language::En)]
    pub base: Language,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson<'a> {
    base: Language,
    languages: &'a [Coverage],
    warnings: Vec<String>,
}

/// Validation warnings for every language against `base`.
fn collect_warnings(table: &TranslationTable, base: Language) -> Vec<LoadWarning> {
    Language::ALL
        .into_iter()
        .filter(|&language| language != base)
        .flat_map(|language| table.validate(base, language))
        .collect()
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs, catalogs: Option<&Path>) -> Result<i32> {
    let table = load_table(catalogs)?;
    let coverage = table.coverage(args.base);
    let warnings = collect_warnings(&table, args.base);

    let any_incomplete = coverage.iter().any(|c| !c.is_complete());

    if args.json {
        let output = CoverageJson {
            base: args.base,
            languages: &coverage,
            warnings: warnings.iter().map(ToString::to_string).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", format_coverage_table(&coverage));

        for lang in coverage.iter().filter(|c| !c.is_complete()) {
            println!("\nMissing in {}:", lang.language.code().bold());
            for key in &lang.missing {
                println!("  - {}", key);
            }
        }

        if !warnings.is_empty() {
            println!();
            for warning in &warnings {
                println!("{}: {}", "warning".yellow().bold(), warning);
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_has_no_warnings() {
        let table = TranslationTable::builtin();
        assert!(collect_warnings(&table, Language::En).is_empty());
    }

    #[test]
    fn warnings_skip_the_base_language() {
        let mut table = TranslationTable::new();
        table.load_str(Language::En, r#"home = "Home";"#).unwrap();
        table
            .load_str(Language::Hi, r#"home = ""; extra = "x";"#)
            .unwrap();

        let warnings = collect_warnings(&table, Language::En);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| matches!(
            w,
            LoadWarning::UnknownKey { language: Language::Hi, .. }
                | LoadWarning::EmptyTranslation { language: Language::Hi, .. }
        )));
    }
}
