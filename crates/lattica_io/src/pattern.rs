//! Run-length-encoded pattern decoding.
//!
//! Grammar: rows are separated by `$`; within a row, a run is an optional
//! decimal repeat count (default 1) followed by a tag letter. `o` marks that
//! many alive cells, any other letter that many dead cells. Whitespace
//! (including newlines embedded in multi-line pattern strings) is removed
//! and a trailing `!` terminator stripped before parsing.

use crate::error::{PatternError, Result};

/// A decoded 2D boolean pattern.
///
/// Rows may be ragged; callers that need a rectangular matrix use
/// [`decode_rectangular`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    pub rows: Vec<Vec<bool>>,
}

impl Pattern {
    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether every row has the same length.
    #[must_use]
    pub fn is_rectangular(&self) -> bool {
        match self.rows.first() {
            Some(first) => self.rows.iter().all(|row| row.len() == first.len()),
            None => true,
        }
    }

    /// Number of alive cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&alive| alive).count())
            .sum()
    }
}

/// Decodes an RLE pattern string into a row-major boolean matrix.
pub fn decode(text: &str) -> Result<Pattern> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let compact = compact.strip_suffix('!').unwrap_or(&compact);

    let mut rows = Vec::new();
    for (row_idx, row_text) in compact.split('$').enumerate() {
        let mut row = Vec::new();
        let mut run: Option<usize> = None;
        for ch in row_text.chars() {
            if let Some(digit) = ch.to_digit(10) {
                let accumulated = run
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|value| value.checked_add(digit as usize))
                    .ok_or(PatternError::RunCountOverflow { row: row_idx })?;
                run = Some(accumulated);
            } else if ch.is_ascii_alphabetic() {
                let count = run.take().unwrap_or(1);
                row.extend(std::iter::repeat(ch == 'o').take(count));
            } else {
                return Err(PatternError::InvalidTag {
                    row: row_idx,
                    tag: ch,
                });
            }
        }
        if let Some(count) = run {
            return Err(PatternError::DanglingRunCount {
                row: row_idx,
                count,
            });
        }
        rows.push(row);
    }

    // A terminal `$` leaves an empty trailing row behind; drop it.
    while rows.len() > 1 && rows.last().is_some_and(Vec::is_empty) {
        rows.pop();
    }
    if rows.iter().all(Vec::is_empty) {
        return Err(PatternError::Empty);
    }
    Ok(Pattern { rows })
}

/// Decodes an RLE pattern and verifies that every row has the same length.
pub fn decode_rectangular(text: &str) -> Result<Pattern> {
    let pattern = decode(text)?;
    let expected = pattern.rows[0].len();
    for (row, cells) in pattern.rows.iter().enumerate() {
        if cells.len() != expected {
            return Err(PatternError::NonRectangular {
                row,
                len: cells.len(),
                expected,
            });
        }
    }
    Ok(pattern)
}
