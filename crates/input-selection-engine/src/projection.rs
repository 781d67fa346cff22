//! Line/column view of a selection against one text snapshot.

use serde::{Deserialize, Serialize};

use crate::coords::{LineAndColumn, line_column_to_offset, offset_to_line_column};
use crate::selection::{SelectionDirection, SelectionModel, SelectionRange};

/// The edges of a [`SelectionModel`] as lines and columns.
///
/// A snapshot: `generate` recomputes everything from the model's current
/// range, and the direction is captured at that moment rather than derived
/// from the coordinates afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionCoordinates {
    pub start: LineAndColumn,
    pub end: LineAndColumn,
    pub direction: SelectionDirection,
}

impl SelectionCoordinates {
    /// Project `selection` onto `text`, replacing whatever was held before.
    ///
    /// Only the current range is used; `previous` is ignored.
    pub fn generate(&mut self, selection: &SelectionModel, text: &str) {
        self.start = offset_to_line_column(text, selection.start);
        self.end = offset_to_line_column(text, selection.end);
        self.direction = selection.direction();
    }

    pub fn get(&self) -> SelectionRange<LineAndColumn> {
        SelectionRange::new(self.start, self.end)
    }

    /// The coordinates with the earlier edge first, per the captured direction.
    pub fn get_ordered(&self) -> SelectionRange<LineAndColumn> {
        if self.direction == SelectionDirection::Backward {
            return self.get().swapped();
        }
        self.get()
    }

    /// Map the held coordinates back to offsets in `text`.
    ///
    /// `text` may be a newer snapshot than the one the coordinates came from;
    /// lines and columns that no longer exist clamp.
    pub fn to_offsets(&self, text: &str) -> SelectionRange {
        let to_offset =
            |point: LineAndColumn| isize::try_from(line_column_to_offset(text, point)).unwrap_or(isize::MAX);
        SelectionRange::new(to_offset(self.start), to_offset(self.end))
    }
}
