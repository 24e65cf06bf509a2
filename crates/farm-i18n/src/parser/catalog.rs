//! Catalog file parser.
//!
//! A catalog supplies one language's strings, one `key = "text";` entry at a
//! time, with `//` line comments between entries.

use winnow::combinator::{alt, preceded, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{none_of, one_of, take_while};

use super::error::ParseError;

/// One `key = "text";` entry of a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// The symbolic key, e.g. `insuranceTitle`.
    pub key: String,
    /// Display text with escapes already decoded.
    pub text: String,
    /// Line of the key (1-based).
    pub line: usize,
    /// Column of the key (1-based, in characters).
    pub column: usize,
}

/// Parse catalog source into entries, in file order.
///
/// Duplicate keys are not rejected here; the table loader does that so the
/// error can name the file.
pub fn parse_catalog(input: &str) -> Result<Vec<CatalogEntry>, ParseError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut remaining = input;
    let mut entries = Vec::new();

    loop {
        let _ = skip_ws_and_comments(&mut remaining);
        if remaining.is_empty() {
            return Ok(entries);
        }

        let (line, column) = calculate_position(input, remaining);
        let key = key_identifier(&mut remaining)
            .map_err(|_| syntax_error(input, remaining, "expected a translation key".into()))?;

        let _ = skip_ws_and_comments(&mut remaining);
        expect_char(input, &mut remaining, '=', || {
            format!("expected '=' after key '{key}'")
        })?;

        let _ = skip_ws_and_comments(&mut remaining);
        let text = quoted_text(input, &mut remaining)?;

        let _ = skip_ws_and_comments(&mut remaining);
        expect_char(input, &mut remaining, ';', || {
            format!("expected ';' after the text of '{key}'")
        })?;

        entries.push(CatalogEntry {
            key,
            text,
            line,
            column,
        });
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let line_start = consumed_str.rfind('\n').map_or(0, |pos| pos + 1);
    let column = consumed_str[line_start..].chars().count() + 1;
    (line, column)
}

fn syntax_error(original: &str, remaining: &str, message: String) -> ParseError {
    let (line, column) = calculate_position(original, remaining);
    ParseError::Syntax {
        line,
        column,
        message,
    }
}

fn eof_error(original: &str, remaining: &str) -> ParseError {
    let (line, column) = calculate_position(original, remaining);
    ParseError::UnexpectedEof { line, column }
}

/// Consume `expected` or report what was found instead.
fn expect_char(
    original: &str,
    input: &mut &str,
    expected: char,
    message: impl FnOnce() -> String,
) -> Result<(), ParseError> {
    if let Some(rest) = input.strip_prefix(expected) {
        *input = rest;
        Ok(())
    } else if input.is_empty() {
        Err(eof_error(original, input))
    } else {
        Err(syntax_error(original, input, message()))
    }
}

/// Skip whitespace and line comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws_only.void(), line_comment.void()))).parse_next(input)?;
    Ok(())
}

/// Parse whitespace (no comments).
fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_whitespace()).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Parse a key: an ASCII letter followed by alphanumerics, `_`, `.` or `-`.
fn key_identifier(input: &mut &str) -> ModalResult<String> {
    (
        one_of(|c: char| c.is_ascii_alphabetic()),
        take_while(0.., |c: char| {
            c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
        }),
    )
        .take()
        .map(|s: &str| s.to_owned())
        .parse_next(input)
}

/// Parse a double-quoted, single-line text value.
fn quoted_text(original: &str, input: &mut &str) -> Result<String, ParseError> {
    expect_char(original, input, '"', || "expected quoted text".into())?;

    let text: String = repeat(0.., text_char)
        .parse_next(input)
        .map_err(|_: ErrMode<ContextError>| syntax_error(original, *input, "invalid text".into()))?;

    match input.chars().next() {
        Some('"') => {
            *input = &input[1..];
            Ok(text)
        }
        None => Err(eof_error(original, input)),
        Some('\n') => Err(syntax_error(
            original,
            input,
            "unterminated text: missing closing '\"'".into(),
        )),
        Some('\\') => {
            let escaped = input.chars().nth(1).map_or_else(String::new, String::from);
            Err(syntax_error(
                original,
                input,
                format!("unknown escape sequence '\\{escaped}'"),
            ))
        }
        Some(c) => Err(syntax_error(
            original,
            input,
            format!("unexpected character '{c}' in text"),
        )),
    }
}

/// Parse a single text character, decoding escapes.
fn text_char(input: &mut &str) -> ModalResult<char> {
    alt((escape_sequence, none_of(['"', '\\', '\n']))).parse_next(input)
}

/// Parse escape sequences in text: \" \\ \n \t
fn escape_sequence(input: &mut &str) -> ModalResult<char> {
    preceded(
        '\\',
        alt((
            '"'.value('"'),
            '\\'.value('\\'),
            'n'.value('\n'),
            't'.value('\t'),
        )),
    )
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_counts_characters_not_bytes() {
        let source = "home = \"होम\";\nx";
        let remaining = &source[source.len() - 1..];
        assert_eq!(calculate_position(source, remaining), (2, 1));

        let after_text = &source[source.find(';').unwrap()..];
        assert_eq!(calculate_position(source, after_text), (1, 13));
    }

    #[test]
    fn key_identifier_accepts_dotted_and_dashed_keys() {
        let mut input = "nav.risk-check_2 =";
        assert_eq!(key_identifier(&mut input).unwrap(), "nav.risk-check_2");
        assert_eq!(input, " =");
    }

    #[test]
    fn key_identifier_rejects_leading_digit() {
        let mut input = "2fast";
        assert!(key_identifier(&mut input).is_err());
    }
}
