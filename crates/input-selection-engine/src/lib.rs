/*!
 * # Input Selection Engine
 *
 * Bookkeeping core for input/textarea style editing widgets. The engine
 * tracks one contiguous selection over a text value and maps flat character
 * offsets to `(line, column)` pairs and back. It never touches the widget:
 * callers hand in the text and the raw caret offsets they read from the host,
 * and read back ranges or line/column coordinates.
 *
 * ## Module Structure
 *
 * - **`coords`**: pure offset <-> line/column conversions over a text snapshot
 * - **`selection`**: `SelectionModel`, the directional range with one step of
 *   history and a single save/restore checkpoint
 * - **`projection`**: `SelectionCoordinates`, the line/column view of a
 *   `SelectionModel` against one text snapshot
 *
 * ## Usage Pattern
 *
 * ```rust
 * use input_selection_engine::*;
 *
 * let text = "abc\ndef\nghi";
 *
 * // Caret at "f", then drag back to the start of the text
 * let mut selection = SelectionModel::from(6);
 * selection.set_end(0);
 * assert_eq!(selection.direction(), SelectionDirection::Backward);
 * assert_eq!(selection.get_ordered(), SelectionRange::new(0, 6));
 *
 * // Line/column view for a status bar
 * let coords = selection.coordinates(text);
 * assert_eq!(coords.start, LineAndColumn::new(1, 2));
 * assert_eq!(coords.end, LineAndColumn::new(0, 0));
 * ```
 *
 * Offsets and columns count `char`s. Everything is total: out-of-range input
 * is clamped, never rejected.
 */

pub mod coords;
pub mod projection;
pub mod selection;

// Re-export key types for easier usage
pub use coords::{
    LineAndColumn, char_len, last_line, line_column_to_offset, offset_to_line_column,
    signed_line_column_to_offset,
};
pub use projection::SelectionCoordinates;
pub use selection::{
    ParseDirectionError, ParseRangeInputError, RangeInput, SavedSelection, SelectionDirection,
    SelectionModel, SelectionRange,
};
