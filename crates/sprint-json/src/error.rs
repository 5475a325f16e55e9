//! Error types for validation, parsing, and serialization.

use std::fmt;
use thiserror::Error;

/// A location in the source text.
///
/// `offset` counts characters (not bytes) from the start of the input;
/// `line` and `column` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// The position of the first character of a document.
    pub const fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// The position just past the end of `text`.
    pub fn after(text: &str) -> Self {
        let mut position = Self::start();
        for c in text.chars() {
            position.advance(c);
        }
        position
    }

    pub(crate) fn advance(&mut self, c: char) {
        self.offset += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {} (offset {})",
            self.line, self.column, self.offset
        )
    }
}

/// Errors raised by the value model, the parser, and the writer.
#[derive(Error, Debug)]
pub enum JsonError {
    /// A value that JSON cannot represent was offered for insertion
    /// (a NaN or infinite double, or a payload that is not a JSON tree).
    #[error("Invalid JSON value: {value}")]
    InvalidType { value: String },

    /// The input text violates the JSON grammar.
    #[error("Malformed JSON at {position}: {message}")]
    MalformedDocument { message: String, position: Position },

    /// A generic payload could not be converted through serde.
    #[error("Payload serialization error: {0}")]
    Payload(#[from] serde_json::Error),

    /// Writing to a streaming sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl JsonError {
    pub fn invalid_type(value: impl fmt::Debug) -> Self {
        JsonError::InvalidType {
            value: format!("{value:?}"),
        }
    }

    pub fn malformed(message: impl Into<String>, position: Position) -> Self {
        JsonError::MalformedDocument {
            message: message.into(),
            position,
        }
    }

    /// Source position, for errors raised while scanning text.
    pub fn position(&self) -> Option<Position> {
        match self {
            JsonError::MalformedDocument { position, .. } => Some(*position),
            _ => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, JsonError::MalformedDocument { .. })
    }

    pub fn is_invalid_type(&self) -> bool {
        matches!(self, JsonError::InvalidType { .. })
    }
}

/// Convenience alias used throughout sprint-json.
pub type Result<T> = std::result::Result<T, JsonError>;
