//! Offset <-> line/column mapping over a text snapshot.
//!
//! Both directions are total. Offsets before the text clamp to `{0, 0}`,
//! offsets past the end behave as the end of the text, and columns past the
//! end of a line snap to the end of that line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A zero-based line and column inside one text snapshot.
///
/// Only meaningful for the text it was computed from: after an edit the same
/// pair may denote a different place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct LineAndColumn {
    /// Number of newlines before the position.
    pub line: usize,
    /// Number of chars between the last newline and the position.
    pub col: usize,
}

impl LineAndColumn {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for LineAndColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Length of `text` in offset units (chars).
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// The last `'\n'` separated segment of `text`; the whole text if it has no newline.
pub fn last_line(text: &str) -> &str {
    text.rsplit('\n').next().unwrap_or_default()
}

/// Byte index of the char at `offset`, or `text.len()` when past the end.
fn byte_index(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map_or(text.len(), |(index, _)| index)
}

/// Convert a flat char offset to a line and column in `text`.
pub fn offset_to_line_column(text: &str, offset: isize) -> LineAndColumn {
    let offset = usize::try_from(offset).unwrap_or(0);
    let prefix = &text[..byte_index(text, offset)];

    LineAndColumn {
        line: prefix.matches('\n').count(),
        col: char_len(last_line(prefix)),
    }
}

/// Convert a line and column back to a flat char offset in `text`.
///
/// A line past the last line clamps to the end of the text. A column past the
/// end of its line clamps to the end of that line.
pub fn line_column_to_offset(text: &str, point: LineAndColumn) -> usize {
    let mut offset = 0;

    for (index, line) in text.split('\n').enumerate() {
        let line_len = char_len(line);
        if index == point.line {
            return offset + point.col.min(line_len);
        }
        // +1 for the newline separator
        offset += line_len + 1;
    }

    char_len(text)
}

/// [`line_column_to_offset`] for signed host input.
///
/// A negative line maps to offset `0`; a negative column clamps to `0`.
pub fn signed_line_column_to_offset(text: &str, line: isize, col: isize) -> usize {
    let Ok(line) = usize::try_from(line) else {
        return 0;
    };
    let col = usize::try_from(col).unwrap_or(0);
    line_column_to_offset(text, LineAndColumn::new(line, col))
}
