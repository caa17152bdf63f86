//! Error types for lattica_io.
//!
//! Pattern decoding failures are setup-time errors reported to the caller;
//! there is no retry policy.

use thiserror::Error;

/// Malformed-pattern conditions raised while decoding RLE text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A run count with no tag character after it.
    #[error("run count {count} at end of row {row} has no tag character")]
    DanglingRunCount { row: usize, count: usize },

    /// A run count too large to represent.
    #[error("run count in row {row} is too large")]
    RunCountOverflow { row: usize },

    /// A tag that is not a letter.
    #[error("invalid tag character {tag:?} in row {row}")]
    InvalidTag { row: usize, tag: char },

    /// The text decodes to no cells at all.
    #[error("pattern is empty")]
    Empty,

    /// Rows of differing lengths where a rectangular pattern is required.
    #[error("non-rectangular pattern: row {row} has length {len}, expected {expected}")]
    NonRectangular {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Result type alias for pattern decoding.
pub type Result<T> = std::result::Result<T, PatternError>;
