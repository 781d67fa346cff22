//! UniFFI bindings for input-selection host widget layers
//!
//! Exposes a selection handle and the offset/line-column mapper to hosts that
//! own the real input element (Kotlin/Swift text fields, web views). The host
//! reads caret offsets from its widget, drives the handle, and writes the
//! results back itself.
//!
//! Host integers are `i64`; negative offsets are legal (the unset selection is
//! `-1..-1`) and negative lines/columns clamp.

use input_selection_engine::{
    LineAndColumn, SelectionCoordinates, SelectionDirection, SelectionModel, SelectionRange,
    offset_to_line_column as engine_offset_to_line_column, signed_line_column_to_offset,
};
use std::sync::{Arc, Mutex, MutexGuard};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Parse error: {reason}")]
    ParseError { reason: String },
}

fn parse_direction(direction: &str) -> Result<SelectionDirection, FfiError> {
    direction.parse().map_err(|e: input_selection_engine::ParseDirectionError| {
        FfiError::ParseError {
            reason: e.to_string(),
        }
    })
}

// ============ DTOs ============

/// Offset range; `start` may be greater than `end`.
#[derive(Debug, Clone, Copy, PartialEq, uniffi::Record)]
pub struct RangeDto {
    pub start: i64,
    pub end: i64,
}

impl From<SelectionRange> for RangeDto {
    fn from(range: SelectionRange) -> Self {
        Self {
            start: range.start as i64,
            end: range.end as i64,
        }
    }
}

impl From<RangeDto> for SelectionRange {
    fn from(range: RangeDto) -> Self {
        SelectionRange::new(range.start as isize, range.end as isize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, uniffi::Record)]
pub struct LineAndColumnDto {
    pub line: u64,
    pub col: u64,
}

impl From<LineAndColumn> for LineAndColumnDto {
    fn from(point: LineAndColumn) -> Self {
        Self {
            line: point.line as u64,
            col: point.col as u64,
        }
    }
}

/// Line/column view of a selection; `direction` is "none", "forward" or "backward".
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct CoordinatesDto {
    pub start: LineAndColumnDto,
    pub end: LineAndColumnDto,
    pub direction: String,
}

impl From<SelectionCoordinates> for CoordinatesDto {
    fn from(coords: SelectionCoordinates) -> Self {
        Self {
            start: coords.start.into(),
            end: coords.end.into(),
            direction: coords.direction.to_string(),
        }
    }
}

// ============ Selection Handle ============

/// A selection owned by one host text field.
///
/// The engine model is single-writer; the mutex serializes calls arriving
/// from different host threads.
#[derive(uniffi::Object)]
pub struct SelectionHandle {
    inner: Mutex<SelectionModel>,
}

impl SelectionHandle {
    fn wrap(model: SelectionModel) -> Self {
        Self {
            inner: Mutex::new(model),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SelectionModel> {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for SelectionHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[uniffi::export]
impl SelectionHandle {
    /// An unset selection (`-1..-1`).
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self::wrap(SelectionModel::new())
    }

    /// A caret at `pos`.
    #[uniffi::constructor]
    pub fn from_position(pos: i64) -> Self {
        Self::wrap(SelectionModel::from(pos as isize))
    }

    #[uniffi::constructor]
    pub fn from_range(range: RangeDto) -> Self {
        Self::wrap(SelectionModel::from(SelectionRange::from(range)))
    }

    /// Copy of another handle's current range, without its history.
    #[uniffi::constructor]
    pub fn copy_of(other: Arc<SelectionHandle>) -> Self {
        let model = SelectionModel::from(&*other.lock());
        Self::wrap(model)
    }

    pub fn direction(&self) -> String {
        self.lock().direction().to_string()
    }

    pub fn is_in_selection(&self, pos: i64) -> bool {
        self.lock().is_in_selection(pos as isize)
    }

    pub fn is_before_selection(&self, pos: i64) -> bool {
        self.lock().is_before_selection(pos as isize)
    }

    pub fn is_after_selection(&self, pos: i64) -> bool {
        self.lock().is_after_selection(pos as isize)
    }

    pub fn get(&self) -> RangeDto {
        self.lock().get().into()
    }

    pub fn get_ordered(&self) -> RangeDto {
        self.lock().get_ordered().into()
    }

    pub fn get_previous(&self) -> RangeDto {
        self.lock().get_previous().into()
    }

    pub fn size(&self) -> u64 {
        self.lock().size() as u64
    }

    pub fn set_position(&self, pos: i64) {
        self.lock().set(pos as isize);
    }

    /// Set a range; `direction` "backward" selects from `range.end` to `range.start`.
    pub fn set_range(&self, range: RangeDto, direction: Option<String>) -> Result<(), FfiError> {
        let range = SelectionRange::from(range);
        match direction {
            Some(direction) => {
                let direction = parse_direction(&direction)?;
                self.lock().set_directed(range, direction);
            }
            None => self.lock().set(range),
        }
        Ok(())
    }

    pub fn expand_position(&self, pos: i64) {
        self.lock().expand(pos as isize);
    }

    pub fn expand_range(&self, range: RangeDto) {
        self.lock().expand(SelectionRange::from(range));
    }

    pub fn set_end(&self, pos: i64) {
        self.lock().set_end(pos as isize);
    }

    pub fn offset_position(&self, delta: i64) {
        self.lock().offset(delta as isize);
    }

    pub fn offset_range(&self, delta: RangeDto) {
        self.lock().offset(SelectionRange::from(delta));
    }

    pub fn save(&self) {
        self.lock().save();
    }

    pub fn restore(&self) {
        self.lock().restore();
    }

    /// Line/column view of the selection in `text`.
    pub fn coordinates(&self, text: String) -> CoordinatesDto {
        self.lock().coordinates(&text).into()
    }
}

// ============ Mapper ============

#[uniffi::export]
pub fn offset_to_line_column(text: String, offset: i64) -> LineAndColumnDto {
    engine_offset_to_line_column(&text, offset as isize).into()
}

/// Negative lines map to offset 0, negative columns clamp to 0.
#[uniffi::export]
pub fn line_column_to_offset(text: String, line: i64, col: i64) -> u64 {
    signed_line_column_to_offset(&text, line as isize, col as isize) as u64
}
