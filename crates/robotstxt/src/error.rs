//! Error types for robots.txt parsing.

use thiserror::Error;

/// Errors that can occur while parsing a robots.txt document.
#[derive(Debug, Error)]
pub enum Error {
    /// The input did not match the grammar.
    #[error("parse error at line {line}, column {column}: {reason}")]
    Parse {
        /// Line where matching stopped (1-based).
        line: usize,
        /// Column where matching stopped (1-based, in characters).
        column: usize,
        /// Reason for the parse failure.
        reason: String,
    },

    /// A parser configuration could not be read.
    #[error("invalid parser configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for robots.txt operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds a parse error from grammar failures reported against `text`.
    ///
    /// The failure that got furthest into the input is reported, since it
    /// names the alternative that came closest to matching.
    pub(crate) fn from_grammar(text: &str, errors: Vec<chumsky::error::Simple<char>>) -> Self {
        let Some(error) = errors.into_iter().max_by_key(|e| e.span().start) else {
            return Self::Parse {
                line: 1,
                column: 1,
                reason: "input did not match".to_string(),
            };
        };

        let (line, column) = position(text, error.span().start);
        Self::Parse {
            line,
            column,
            reason: error.to_string(),
        }
    }
}

/// Converts a character offset into a 1-based (line, column) pair.
///
/// CRLF counts as one line break.
fn position(text: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    let mut chars = text.chars().take(offset).peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' | '\n' => {
                line += 1;
                column = 1;
            }
            _ => column += 1,
        }
    }

    (line, column)
}
