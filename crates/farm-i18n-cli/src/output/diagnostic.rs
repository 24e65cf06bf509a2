//! Miette diagnostic wrapper for catalog errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::fs;
use std::path::Path;

use farm_i18n::parser::ParseError;
use farm_i18n::LoadError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for a catalog error.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(farm_i18n::catalog))]
pub struct CatalogDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    label: String,

    message: String,

    #[help]
    help: Option<String>,
}

impl CatalogDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (line, column, message) = match err {
            ParseError::Syntax {
                line,
                column,
                message,
            } => (*line, *column, format!("syntax error: {message}")),
            ParseError::UnexpectedEof { line, column } => {
                (*line, *column, "syntax error: unexpected end of file".into())
            }
            ParseError::InvalidUtf8 => (1, 1, "invalid UTF-8".into()),
        };

        let help = matches!(err, ParseError::UnexpectedEof { .. })
            .then(|| "every entry has the form: key = \"text\";".to_string());

        Self::at(path, content, line, column, "error here", message, help)
    }

    /// Create a diagnostic for a key defined twice in one catalog.
    pub fn duplicate_key(
        path: &Path,
        content: &str,
        key: &str,
        line: usize,
        first_line: usize,
    ) -> Self {
        Self::at(
            path,
            content,
            line,
            1,
            "defined again here",
            format!("duplicate key '{key}'"),
            Some(format!("'{key}' is first defined on line {first_line}")),
        )
    }

    /// Build a diagnostic for a load error that points into a file, re-reading
    /// the file for context. Returns None for errors without a location.
    pub fn from_load_error(err: &LoadError) -> Option<Self> {
        match err {
            LoadError::Parse {
                path,
                line,
                column,
                message,
            } => {
                let content = fs::read_to_string(path).ok()?;
                let parse = ParseError::Syntax {
                    line: *line,
                    column: *column,
                    message: message.clone(),
                };
                Some(Self::from_parse_error(path, &content, &parse))
            }
            LoadError::DuplicateKey {
                path,
                key,
                line,
                first_line,
            } => {
                let content = fs::read_to_string(path).ok()?;
                Some(Self::duplicate_key(path, &content, key, *line, *first_line))
            }
            LoadError::Io { .. } | LoadError::NoPathForReload { .. } => None,
        }
    }

    fn at(
        path: &Path,
        content: &str,
        line: usize,
        column: usize,
        label: &str,
        message: String,
        help: Option<String>,
    ) -> Self {
        let (offset, len) = span_at(content, line, column);
        CatalogDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, len).into(),
            label: label.to_string(),
            message,
            help,
        }
    }
}

/// Convert a 1-based line and character column to a byte span of one
/// character, clamped to the content.
///
/// The parser ignores a leading byte order mark, so positions on the first
/// line are shifted past it.
pub fn span_at(content: &str, line: usize, column: usize) -> (usize, usize) {
    let bom = if content.starts_with('\u{feff}') {
        '\u{feff}'.len_utf8()
    } else {
        0
    };
    let body = &content[bom..];

    let line_start: usize = body
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let rest = &body[line_start.min(body.len())..];
    let column_bytes: usize = rest
        .chars()
        .take(column.saturating_sub(1))
        .map(char::len_utf8)
        .sum();

    let offset = (bom + line_start + column_bytes).min(content.len());
    let len = content[offset..].chars().next().map_or(0, char::len_utf8);
    (offset, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_on_first_line() {
        assert_eq!(span_at("home \"x\";", 1, 6), (5, 1));
    }

    #[test]
    fn span_counts_multibyte_characters() {
        let content = "a = \"होम\" ?";
        let (offset, len) = span_at(content, 1, 11);
        assert_eq!(&content[offset..offset + len], "?");
    }

    #[test]
    fn span_on_later_line() {
        let content = "a = \"A\";\nb = \"B\"\nc";
        let (offset, len) = span_at(content, 3, 1);
        assert_eq!(&content[offset..offset + len], "c");
    }

    #[test]
    fn span_past_end_is_clamped() {
        let content = "home = ";
        assert_eq!(span_at(content, 1, 8), (7, 0));
        assert_eq!(span_at(content, 9, 9), (7, 0));
    }

    #[test]
    fn span_skips_byte_order_mark() {
        let content = "\u{feff}home \"x\";";
        let (offset, len) = span_at(content, 1, 6);
        assert_eq!(&content[offset..offset + len], "\"");
    }
}
