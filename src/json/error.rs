//! Error types for JSON parsing.

use std::fmt;

/// Errors produced by [`parse_json`](super::parse_json).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input is not well-formed JSON.
    Syntax {
        /// Description from the underlying parser
        message: String,
        /// Line of the offending input (1-based)
        line: usize,
        /// Column of the offending input (1-based)
        column: usize,
    },

    /// A fractional or exponent literal whose magnitude does not fit a finite `f64`.
    NumberOutOfRange {
        /// The literal as written in the input
        literal: String,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix
        valid_up_to: usize,
    },
}

impl ParseError {
    /// Returns the line number for syntax errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Syntax { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax {
                message,
                line,
                column,
            } => write!(
                f,
                "Invalid JSON at line {}, column {}: {}",
                line, column, message
            ),
            ParseError::NumberOutOfRange { literal } => {
                write!(f, "Number out of range: {}", literal)
            }
            ParseError::InvalidUtf8 { valid_up_to } => {
                write!(f, "Invalid UTF-8 after byte {}", valid_up_to)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Syntax {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}
