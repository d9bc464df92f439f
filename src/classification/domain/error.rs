//! Error types for classification domain validation and parsing.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors returned while parsing a task due date.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DueDateError {
    /// The value does not separate its date and time parts with a single `T`.
    #[error("due date '{0}' must separate date and time with 'T'")]
    MissingTimeSeparator(String),

    /// The date part is not `year-month-day` integers.
    #[error("due date '{0}' has an invalid date part, expected YYYY-MM-DD")]
    InvalidDatePart(String),

    /// The time part is not `hour:minute` integers with an optional seconds field.
    #[error("due date '{0}' has an invalid time part, expected HH:MM[:SS]")]
    InvalidTimePart(String),

    /// The components parse but do not name a real date and time.
    #[error("due date '{0}' is not a valid calendar date and time")]
    OutOfRange(String),
}

/// Errors returned while assembling an annotated text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnnotationError {
    /// A token refers to a head token that does not exist.
    #[error("token {token} refers to head {head}, but only {len} tokens exist")]
    HeadOutOfRange {
        /// Position of the offending token.
        token: usize,
        /// Head index recorded on the token.
        head: usize,
        /// Number of tokens in the annotation.
        len: usize,
    },
}

/// Errors returned while loading the keyword configuration.
#[derive(Debug, Error)]
pub enum KeywordConfigError {
    /// The keyword file could not be read.
    #[error("failed to read keyword file '{path}': {source}")]
    Read {
        /// Path of the keyword file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The keyword document is not valid JSON or lacks a required list.
    #[error("invalid keyword document: {0}")]
    Parse(#[from] serde_json::Error),
}
