//! Implementation of the `farm-i18n check` command.

use std::fs;
use std::path::{Path, PathBuf};

use farm_i18n::parser::{parse_catalog, ParseError};
use farm_i18n::{Language, LanguageTable, LoadError};
use miette::{IntoDiagnostic, Report};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::CatalogDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (.i18n)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of checking one catalog file.
#[derive(Debug)]
enum FileStatus {
    Valid { entries: usize },
    Invalid(Report),
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    path: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    entries: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

/// Parse a catalog file and check it for duplicate keys.
fn check_file(path: &Path) -> FileStatus {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            return FileStatus::Invalid(miette::miette!("cannot read {}: {e}", path.display()));
        }
    };
    let Ok(content) = String::from_utf8(bytes) else {
        return FileStatus::Invalid(
            CatalogDiagnostic::from_parse_error(path, "", &ParseError::InvalidUtf8).into(),
        );
    };

    let entries = match parse_catalog(&content) {
        Ok(entries) => entries,
        Err(e) => {
            return FileStatus::Invalid(
                CatalogDiagnostic::from_parse_error(path, &content, &e).into(),
            );
        }
    };

    match LanguageTable::from_entries(entries, path) {
        Ok(table) => FileStatus::Valid {
            entries: table.len(),
        },
        Err(LoadError::DuplicateKey {
            key,
            line,
            first_line,
            ..
        }) => FileStatus::Invalid(
            CatalogDiagnostic::duplicate_key(path, &content, &key, line, first_line).into(),
        ),
        Err(e) => FileStatus::Invalid(miette::miette!("{e}")),
    }
}

/// A warning when the file name does not select a supported language.
fn file_name_warning(path: &Path) -> Option<String> {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    Language::from_code(stem).is_none().then(|| {
        format!("file name '{stem}' is not a supported language code; catalog directories skip it")
    })
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut any_invalid = false;
    let mut json_results = Vec::new();

    for path in &args.files {
        let status = check_file(path);
        let warning = file_name_warning(path);
        any_invalid |= matches!(status, FileStatus::Invalid(_));

        if args.json {
            let (entries, error) = match &status {
                FileStatus::Valid { entries } => (Some(*entries), None),
                FileStatus::Invalid(report) => (None, Some(report.to_string())),
            };
            json_results.push(CheckJson {
                path: path.display().to_string(),
                ok: error.is_none(),
                entries,
                error,
                warning,
            });
            continue;
        }

        match status {
            FileStatus::Valid { entries } => {
                println!("{} {} ({entries} entries)", "ok".green().bold(), path.display());
            }
            FileStatus::Invalid(report) => {
                eprintln!("{:?}", report);
            }
        }
        if let Some(warning) = warning {
            eprintln!("{}: {warning}", "warning".yellow().bold());
        }
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json_results).into_diagnostic()?
        );
    }

    if any_invalid {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn valid_catalog_counts_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "hi.i18n", "home = \"होम\";\nmap = \"नक्शा\";".as_bytes());
        assert!(matches!(check_file(&path), FileStatus::Valid { entries: 2 }));
    }

    #[test]
    fn syntax_error_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "hi.i18n", b"home \"x\";");
        match check_file(&path) {
            FileStatus::Invalid(report) => {
                assert_eq!(report.to_string(), "syntax error: expected '=' after key 'home'");
            }
            FileStatus::Valid { .. } => panic!("expected invalid"),
        }
    }

    #[test]
    fn duplicate_key_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "en.i18n", b"home = \"A\";\nhome = \"B\";");
        match check_file(&path) {
            FileStatus::Invalid(report) => {
                assert_eq!(report.to_string(), "duplicate key 'home'");
            }
            FileStatus::Valid { .. } => panic!("expected invalid"),
        }
    }

    #[test]
    fn missing_and_non_utf8_files_are_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let binary = write(dir.path(), "ta.i18n", &[0xff, 0xfe, 0x00]);
        assert!(matches!(check_file(&binary), FileStatus::Invalid(_)));
        assert!(matches!(
            check_file(&dir.path().join("absent.i18n")),
            FileStatus::Invalid(_)
        ));
    }

    #[test]
    fn file_name_must_be_a_supported_code() {
        assert_eq!(file_name_warning(Path::new("content/hi.i18n")), None);
        assert!(file_name_warning(Path::new("content/fr.i18n")).is_some());
        assert!(file_name_warning(Path::new("content/HI.i18n")).is_some());
    }
}
