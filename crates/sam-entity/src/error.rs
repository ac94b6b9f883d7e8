//! Error types for parsing SAM Entity API responses.

use std::fmt;

use serde_json::error::Category;

/// Broad class of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Input is not well-formed JSON.
    Syntax,
    /// Well-formed JSON whose shape does not match a declared field.
    Data,
    /// Input ended before the JSON value was complete.
    Eof,
    /// The underlying reader failed.
    Io,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "syntax"),
            Self::Data => write!(f, "data"),
            Self::Eof => write!(f, "eof"),
            Self::Io => write!(f, "io"),
        }
    }
}

impl From<Category> for ParseErrorKind {
    fn from(category: Category) -> Self {
        match category {
            Category::Syntax => Self::Syntax,
            Category::Data => Self::Data,
            Category::Eof => Self::Eof,
            Category::Io => Self::Io,
        }
    }
}

/// A SAM Entity API payload could not be decoded into the schema.
///
/// No partial value accompanies the error.
#[derive(Debug, thiserror::Error)]
#[error("{kind} error parsing SAM entity response at line {line}, column {column}: {source}")]
pub struct ParseError {
    kind: ParseErrorKind,
    line: usize,
    column: usize,
    #[source]
    source: serde_json::Error,
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// One-based line of the failure, or 0 when not tied to a position.
    pub fn line(&self) -> usize {
        self.line
    }

    /// One-based column of the failure, or 0 when not tied to a position.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(source: serde_json::Error) -> Self {
        Self {
            kind: source.classify().into(),
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}
