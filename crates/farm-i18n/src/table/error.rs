//! Error and warning types for translation tables.

use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;
use crate::types::Language;

/// Errors that occur while loading catalogs into a table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a catalog.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The same key appears twice in one catalog.
    #[error("{path}:{line}: duplicate key '{key}', first defined on line {first_line}")]
    DuplicateKey {
        path: PathBuf,
        key: String,
        line: usize,
        first_line: usize,
    },

    /// Attempted to reload a language that was not loaded from a file.
    #[error("cannot reload '{language}': it was not loaded from a file")]
    NoPathForReload { language: Language },
}

impl LoadError {
    pub(crate) fn from_parse(path: PathBuf, err: ParseError) -> Self {
        match err {
            ParseError::Syntax {
                line,
                column,
                message,
            } => LoadError::Parse {
                path,
                line,
                column,
                message,
            },
            ParseError::UnexpectedEof { line, column } => LoadError::Parse {
                path,
                line,
                column,
                message: "unexpected end of file".to_string(),
            },
            ParseError::InvalidUtf8 => LoadError::Parse {
                path,
                line: 0,
                column: 0,
                message: "invalid UTF-8".to_string(),
            },
        }
    }
}

/// Non-fatal findings from comparing a language against the base language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
    /// A key exists in the target language but not in the base language.
    #[error("key '{key}' in '{language}' is not defined in the base language")]
    UnknownKey { key: String, language: Language },

    /// A key is present with an empty translation.
    ///
    /// Empty text is a valid translation and is displayed as such; this only
    /// flags it for content review.
    #[error("key '{key}' in '{language}' has an empty translation")]
    EmptyTranslation { key: String, language: Language },
}

/// Compute "did you mean" suggestions for a key.
///
/// - Distance threshold: 1 for keys of 3 characters or fewer, 2 otherwise
/// - Exact matches are not suggestions
/// - Limit to 3 suggestions, sorted by distance then key
pub fn compute_suggestions<'a>(key: &str, available: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &str)> = available
        .into_iter()
        .filter_map(|candidate| {
            let dist = levenshtein(key, candidate);
            (dist > 0 && dist <= max_distance).then_some((dist, candidate))
        })
        .collect();

    suggestions.sort_unstable();
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_are_sorted_and_limited() {
        let keys = ["home", "hone", "homes", "dome", "map", "house"];
        let suggestions = compute_suggestions("home", keys);
        assert_eq!(suggestions, vec!["dome", "homes", "hone"]);
    }

    #[test]
    fn short_keys_use_tighter_threshold() {
        let suggestions = compute_suggestions("mop", ["map", "mole", "top"]);
        assert_eq!(suggestions, vec!["map", "top"]);
    }

    #[test]
    fn unrelated_keys_give_no_suggestions() {
        assert!(compute_suggestions("dashboard", ["home", "map"]).is_empty());
    }
}
