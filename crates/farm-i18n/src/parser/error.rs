//! Parse error types for translation catalogs.

use thiserror::Error;

/// An error that occurred while parsing a catalog.
///
/// Lines and columns are 1-based; columns count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Unexpected end of input.
    #[error("unexpected end of input at {line}:{column}")]
    UnexpectedEof { line: usize, column: usize },

    /// Invalid UTF-8 in input.
    #[error("invalid UTF-8 in input")]
    InvalidUtf8,
}

impl ParseError {
    /// The `(line, column)` of the error, if it has one.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ParseError::Syntax { line, column, .. } | ParseError::UnexpectedEof { line, column } => {
                Some((*line, *column))
            }
            ParseError::InvalidUtf8 => None,
        }
    }
}
