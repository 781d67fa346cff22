//! Directional selection range with one step of history and one checkpoint.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::projection::SelectionCoordinates;

/// A `{start, end}` pair with no implied ordering.
///
/// `SelectionRange` (offsets) is what the model reads and writes;
/// `SelectionRange<LineAndColumn>` is the projected form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionRange<T = isize> {
    pub start: T,
    pub end: T,
}

impl<T> SelectionRange<T> {
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// The same range with `start` and `end` exchanged.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

impl SelectionRange {
    /// Both edges at `pos`.
    pub fn collapsed(pos: isize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }
}

impl Default for SelectionRange {
    fn default() -> Self {
        Self::collapsed(-1)
    }
}

impl From<std::ops::Range<isize>> for SelectionRange {
    fn from(range: std::ops::Range<isize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Which way a selection faces. Derived from start/end, never stored on the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionDirection {
    /// `start == end`: a caret.
    #[default]
    None,
    /// `start < end`.
    Forward,
    /// `start > end`: the anchor is after the focus.
    Backward,
}

impl SelectionDirection {
    /// Direction of the range running from `start` to `end`.
    pub fn between(start: isize, end: isize) -> Self {
        match start.cmp(&end) {
            std::cmp::Ordering::Greater => Self::Backward,
            std::cmp::Ordering::Equal => Self::None,
            std::cmp::Ordering::Less => Self::Forward,
        }
    }

    /// The value a host `selectionDirection` attribute uses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

impl fmt::Display for SelectionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown selection direction: {input:?} (expected none, forward or backward)")]
pub struct ParseDirectionError {
    pub input: String,
}

impl FromStr for SelectionDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "forward" => Ok(Self::Forward),
            "backward" => Ok(Self::Backward),
            other => Err(ParseDirectionError {
                input: other.to_string(),
            }),
        }
    }
}

/// Input accepted by every positional operation: a single offset or a range.
///
/// Normalized to a range with [`RangeInput::into_range`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeInput {
    Position(isize),
    Range(SelectionRange),
}

impl RangeInput {
    /// Whether this input carries distinct `start` and `end` components.
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range(_))
    }

    /// A position becomes a collapsed range; a range passes through.
    pub fn into_range(self) -> SelectionRange {
        match self {
            Self::Position(pos) => SelectionRange::collapsed(pos),
            Self::Range(range) => range,
        }
    }
}

impl From<isize> for RangeInput {
    fn from(pos: isize) -> Self {
        Self::Position(pos)
    }
}

impl From<SelectionRange> for RangeInput {
    fn from(range: SelectionRange) -> Self {
        Self::Range(range)
    }
}

impl From<std::ops::Range<isize>> for RangeInput {
    fn from(range: std::ops::Range<isize>) -> Self {
        Self::Range(range.into())
    }
}

impl From<&SelectionModel> for RangeInput {
    fn from(model: &SelectionModel) -> Self {
        Self::Range(model.get())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRangeInputError {
    #[error("Empty position")]
    Empty,

    #[error("Invalid offset {value:?}: {source}")]
    InvalidOffset {
        value: String,
        source: std::num::ParseIntError,
    },
}

fn parse_offset(value: &str) -> Result<isize, ParseRangeInputError> {
    let value = value.trim();
    value
        .parse()
        .map_err(|source| ParseRangeInputError::InvalidOffset {
            value: value.to_string(),
            source,
        })
}

/// Parses `"5"` as a position and `"2..8"` as a range.
impl FromStr for RangeInput {
    type Err = ParseRangeInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseRangeInputError::Empty);
        }

        match s.split_once("..") {
            Some((start, end)) => Ok(Self::Range(SelectionRange::new(
                parse_offset(start)?,
                parse_offset(end)?,
            ))),
            None => Ok(Self::Position(parse_offset(s)?)),
        }
    }
}

/// Checkpoint taken by [`SelectionModel::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedSelection {
    pub current: SelectionRange,
    pub previous: SelectionRange,
}

/// A single selection over a text value.
///
/// `start` is the anchor, `end` the edge that moved last; either may be the
/// smaller. Every mutator first copies the current range into `previous`, so
/// `previous` always holds the state from just before the last mutation.
/// Only that one step is kept, plus one explicit checkpoint slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionModel {
    pub start: isize,
    pub end: isize,
    pub previous: SelectionRange,
    saved: Option<SavedSelection>,
}

impl Default for SelectionModel {
    fn default() -> Self {
        Self::with(SelectionRange::default())
    }
}

impl From<isize> for SelectionModel {
    fn from(pos: isize) -> Self {
        Self::with(pos)
    }
}

impl From<SelectionRange> for SelectionModel {
    fn from(range: SelectionRange) -> Self {
        Self::with(range)
    }
}

/// Copies the current range only; history and checkpoint start fresh.
impl From<&SelectionModel> for SelectionModel {
    fn from(model: &SelectionModel) -> Self {
        Self::with(model)
    }
}

impl SelectionModel {
    /// An unset selection: `{-1, -1}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection at the given position or range, with empty history.
    pub fn with(input: impl Into<RangeInput>) -> Self {
        let range = input.into().into_range();
        Self {
            start: range.start,
            end: range.end,
            previous: SelectionRange::default(),
            saved: None,
        }
    }

    pub fn direction(&self) -> SelectionDirection {
        SelectionDirection::between(self.start, self.end)
    }

    pub fn is_collapsed(&self) -> bool {
        self.direction() == SelectionDirection::None
    }

    /// `pos` lies inside the ordered range, both ends inclusive.
    pub fn is_in_selection(&self, pos: isize) -> bool {
        let SelectionRange { start, end } = self.get_ordered();
        pos >= start && pos <= end
    }

    /// `pos` is strictly before the ordered start.
    pub fn is_before_selection(&self, pos: isize) -> bool {
        pos < self.get_ordered().start
    }

    /// `pos` is at or after the ordered end.
    ///
    /// Inclusive, unlike [`Self::is_before_selection`]: a caret sitting on the
    /// end boundary counts as after the selection.
    pub fn is_after_selection(&self, pos: isize) -> bool {
        pos >= self.get_ordered().end
    }

    pub fn get(&self) -> SelectionRange {
        SelectionRange::new(self.start, self.end)
    }

    /// The range with the smaller offset first.
    pub fn get_ordered(&self) -> SelectionRange {
        if self.direction() == SelectionDirection::Backward {
            return self.get().swapped();
        }
        self.get()
    }

    /// The range as it was before the last mutation.
    pub fn get_previous(&self) -> SelectionRange {
        self.previous
    }

    /// Number of chars covered by the selection.
    pub fn size(&self) -> usize {
        self.end.abs_diff(self.start)
    }

    fn store_previous(&mut self) {
        self.previous = self.get();
    }

    /// Replace the selection. A position collapses both edges onto it.
    pub fn set(&mut self, input: impl Into<RangeInput>) {
        let range = input.into().into_range();
        self.store_previous();
        self.start = range.start;
        self.end = range.end;
        log::trace!("selection set to {}..{}", self.start, self.end);
    }

    /// Replace the selection, orienting the range by `direction`.
    ///
    /// With [`SelectionDirection::Backward`] the range's edges are swapped, so
    /// `{2, 8}` selects from 8 back to 2.
    pub fn set_directed(&mut self, input: impl Into<RangeInput>, direction: SelectionDirection) {
        let mut range = input.into().into_range();
        if direction == SelectionDirection::Backward {
            range = range.swapped();
        }
        self.set(range);
    }

    /// Grow the selection to cover `input`. Never shrinks.
    ///
    /// The ordered start moves down to `input.start` and the ordered end up to
    /// `input.end`; a backward selection stays backward.
    pub fn expand(&mut self, input: impl Into<RangeInput>) {
        let range = input.into().into_range();
        let backward = self.direction() == SelectionDirection::Backward;
        let ordered = self.get_ordered();
        self.store_previous();

        let grown = SelectionRange::new(ordered.start.min(range.start), ordered.end.max(range.end));
        let grown = if backward { grown.swapped() } else { grown };
        self.start = grown.start;
        self.end = grown.end;
        log::trace!("selection expanded to {}..{}", self.start, self.end);
    }

    /// Move the focus edge only, keeping the anchor. Used for drag-extend.
    pub fn set_end(&mut self, pos: isize) {
        self.store_previous();
        self.end = pos;
        log::trace!("selection end moved to {pos}");
    }

    /// Shift the selection by `delta`.
    ///
    /// A position shifts both edges equally. A range shifts the ordered start
    /// by `delta.start` and the ordered end by `delta.end`; on a backward
    /// selection the ordered start lives in `end`, so the components cross.
    pub fn offset(&mut self, delta: impl Into<RangeInput>) {
        let delta = delta.into().into_range();
        let backward = self.direction() == SelectionDirection::Backward;
        self.store_previous();

        // Saturates at the isize bounds
        if backward {
            self.start = self.start.saturating_add(delta.end);
            self.end = self.end.saturating_add(delta.start);
        } else {
            self.start = self.start.saturating_add(delta.start);
            self.end = self.end.saturating_add(delta.end);
        }
        log::trace!("selection offset to {}..{}", self.start, self.end);
    }

    /// Remember the current range and its history for a later [`Self::restore`].
    ///
    /// Overwrites any checkpoint that was not restored yet.
    pub fn save(&mut self) {
        self.saved = Some(SavedSelection {
            current: self.get(),
            previous: self.previous,
        });
        log::trace!("selection checkpoint saved at {}..{}", self.start, self.end);
    }

    /// Return to the last checkpoint and discard it. No-op without one.
    pub fn restore(&mut self) {
        let Some(saved) = self.saved.take() else {
            return;
        };
        self.previous = saved.previous;
        self.start = saved.current.start;
        self.end = saved.current.end;
        log::trace!("selection restored to {}..{}", self.start, self.end);
    }

    /// The pending checkpoint, if [`Self::save`] was called since the last restore.
    pub fn checkpoint(&self) -> Option<SavedSelection> {
        self.saved
    }

    pub fn has_checkpoint(&self) -> bool {
        self.saved.is_some()
    }

    /// Line/column view of this selection in `text`.
    pub fn coordinates(&self, text: &str) -> SelectionCoordinates {
        let mut coords = SelectionCoordinates::default();
        coords.generate(self, text);
        coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn model(start: isize, end: isize) -> SelectionModel {
        SelectionModel::with(SelectionRange::new(start, end))
    }

    // ============ Construction ============

    #[test]
    fn test_default_is_unset() {
        let selection = SelectionModel::new();
        assert_eq!(selection.get(), SelectionRange::new(-1, -1));
        assert_eq!(selection.get_previous(), SelectionRange::new(-1, -1));
        assert!(!selection.has_checkpoint());
    }

    #[test]
    fn test_from_position_collapses() {
        let selection = SelectionModel::from(10);
        assert_eq!(selection.get(), SelectionRange::new(10, 10));
    }

    #[test]
    fn test_from_range() {
        let selection = SelectionModel::from(SelectionRange::new(10, 20));
        assert_eq!(selection.start, 10);
        assert_eq!(selection.end, 20);
    }

    #[test]
    fn test_from_model_copies_current_range_only() {
        let mut original = model(1, 2);
        original.set(SelectionRange::new(10, 20));
        original.save();

        let copy = SelectionModel::from(&original);
        assert_eq!(copy.get(), SelectionRange::new(10, 20));
        assert_eq!(copy.get_previous(), SelectionRange::new(-1, -1));
        assert!(!copy.has_checkpoint());
    }

    // ============ Direction ============

    #[rstest]
    #[case(10, 20, SelectionDirection::Forward)]
    #[case(20, 10, SelectionDirection::Backward)]
    #[case(10, 10, SelectionDirection::None)]
    fn test_direction(#[case] start: isize, #[case] end: isize, #[case] expected: SelectionDirection) {
        assert_eq!(model(start, end).direction(), expected);
    }

    #[test]
    fn test_direction_follows_field_writes() {
        let mut selection = model(10, 20);
        selection.start = 30;
        assert_eq!(selection.direction(), SelectionDirection::Backward);
    }

    #[test]
    fn test_direction_parse_and_display() {
        for direction in [
            SelectionDirection::None,
            SelectionDirection::Forward,
            SelectionDirection::Backward,
        ] {
            assert_eq!(direction.to_string().parse::<SelectionDirection>(), Ok(direction));
        }
        assert!("sideways".parse::<SelectionDirection>().is_err());
    }

    // ============ Relative position ============

    #[rstest]
    #[case(5, false)]
    #[case(10, true)]
    #[case(15, true)]
    #[case(20, true)]
    #[case(25, false)]
    fn test_is_in_selection_inclusive(#[case] pos: isize, #[case] expected: bool) {
        assert_eq!(model(10, 20).is_in_selection(pos), expected);
        assert_eq!(model(20, 10).is_in_selection(pos), expected);
    }

    /// Boundary policy regression: "before" excludes the start boundary while
    /// "after" includes the end boundary.
    #[rstest]
    #[case(5, true, false)]
    #[case(10, false, false)]
    #[case(15, false, false)]
    #[case(20, false, true)]
    #[case(25, false, true)]
    fn test_before_after_boundary_asymmetry(
        #[case] pos: isize,
        #[case] before: bool,
        #[case] after: bool,
    ) {
        for selection in [model(10, 20), model(20, 10)] {
            assert_eq!(selection.is_before_selection(pos), before, "before({pos})");
            assert_eq!(selection.is_after_selection(pos), after, "after({pos})");
        }
    }

    #[test]
    fn test_caret_is_both_inside_and_after_itself() {
        let caret = SelectionModel::from(7);
        assert!(caret.is_in_selection(7));
        assert!(caret.is_after_selection(7));
        assert!(!caret.is_before_selection(7));
    }

    // ============ Getters ============

    #[test]
    fn test_get_is_unordered() {
        assert_eq!(model(10, 5).get(), SelectionRange::new(10, 5));
    }

    #[rstest]
    #[case(5, 10)]
    #[case(10, 5)]
    #[case(7, 7)]
    #[case(-1, 3)]
    fn test_get_ordered_start_not_after_end(#[case] start: isize, #[case] end: isize) {
        let ordered = model(start, end).get_ordered();
        assert!(ordered.start <= ordered.end);
        assert_eq!(ordered.start, start.min(end));
        assert_eq!(ordered.end, start.max(end));
    }

    #[test]
    fn test_size() {
        assert_eq!(model(5, 10).size(), 5);
        assert_eq!(model(10, 5).size(), 5);
        assert_eq!(model(3, 3).size(), 0);
    }

    // ============ Mutators ============

    #[test]
    fn test_set_position_and_range() {
        let mut selection = SelectionModel::new();
        selection.set(SelectionRange::new(10, 5));
        assert_eq!(selection.get(), SelectionRange::new(10, 5));

        selection.set(5);
        assert_eq!(selection.get(), SelectionRange::new(5, 5));
        assert_eq!(selection.get_previous(), SelectionRange::new(10, 5));
    }

    #[test]
    fn test_set_directed_backward_swaps() {
        let mut selection = SelectionModel::new();
        selection.set_directed(SelectionRange::new(2, 8), SelectionDirection::Backward);
        assert_eq!(selection.get(), SelectionRange::new(8, 2));
        assert_eq!(selection.direction(), SelectionDirection::Backward);

        selection.set_directed(SelectionRange::new(2, 8), SelectionDirection::Forward);
        assert_eq!(selection.get(), SelectionRange::new(2, 8));

        selection.set_directed(4, SelectionDirection::Backward);
        assert_eq!(selection.get(), SelectionRange::new(4, 4));
    }

    #[test]
    fn test_previous_is_pre_image_even_when_unchanged() {
        let mut selection = model(3, 4);
        selection.set(SelectionRange::new(3, 4));
        assert_eq!(selection.get_previous(), SelectionRange::new(3, 4));

        selection.set(9);
        selection.set(9);
        assert_eq!(selection.get_previous(), SelectionRange::new(9, 9));
    }

    #[test]
    fn test_previous_keeps_only_one_step() {
        let mut selection = model(0, 1);
        selection.set(2);
        selection.set(3);
        selection.set(4);
        assert_eq!(selection.get_previous(), SelectionRange::new(3, 3));
    }

    #[rstest]
    #[case(model(5, 10), RangeInput::Position(7), SelectionRange::new(5, 10))]
    #[case(model(5, 10), RangeInput::Position(2), SelectionRange::new(2, 10))]
    #[case(model(5, 10), RangeInput::Position(12), SelectionRange::new(5, 12))]
    #[case(model(5, 10), RangeInput::Range(SelectionRange::new(3, 15)), SelectionRange::new(3, 15))]
    #[case(model(5, 10), RangeInput::Range(SelectionRange::new(6, 8)), SelectionRange::new(5, 10))]
    #[case(model(10, 5), RangeInput::Position(7), SelectionRange::new(10, 5))]
    #[case(model(10, 5), RangeInput::Position(2), SelectionRange::new(10, 2))]
    #[case(model(10, 5), RangeInput::Position(12), SelectionRange::new(12, 5))]
    #[case(model(10, 5), RangeInput::Range(SelectionRange::new(0, 12)), SelectionRange::new(12, 0))]
    fn test_expand_never_shrinks(
        #[case] selection: SelectionModel,
        #[case] input: RangeInput,
        #[case] expected: SelectionRange,
    ) {
        let mut selection = selection;
        let raw = selection.get();
        let direction = selection.direction();
        let before = selection.get_ordered();
        selection.expand(input);

        assert_eq!(selection.get(), expected);
        assert_eq!(selection.get_previous(), raw);
        assert_eq!(selection.direction(), direction);

        let after = selection.get_ordered();
        assert!(after.start <= before.start && after.end >= before.end);
    }

    #[rstest]
    #[case(5, 10, 20)]
    #[case(20, 10, 5)]
    #[case(5, 10, 5)]
    #[case(5, 10, 0)]
    fn test_set_end_keeps_anchor(#[case] start: isize, #[case] end: isize, #[case] new_end: isize) {
        let mut selection = model(start, end);
        selection.set_end(new_end);
        assert_eq!(selection.get(), SelectionRange::new(start, new_end));
        assert_eq!(selection.get_previous(), SelectionRange::new(start, end));
    }

    #[test]
    fn test_offset_by_position() {
        let mut selection = model(5, 10);
        selection.offset(5);
        assert_eq!(selection.get(), SelectionRange::new(10, 15));

        let mut selection = model(10, 5);
        selection.offset(5);
        assert_eq!(selection.get(), SelectionRange::new(15, 10));

        selection.offset(-15);
        assert_eq!(selection.get(), SelectionRange::new(0, -5));
    }

    #[test]
    fn test_offset_saturates_at_bounds() {
        let mut selection = SelectionModel::from(isize::MAX);
        selection.offset(1);
        assert_eq!(selection.get(), SelectionRange::new(isize::MAX, isize::MAX));

        let mut selection = SelectionModel::from(isize::MIN);
        selection.offset(-1);
        assert_eq!(selection.get(), SelectionRange::new(isize::MIN, isize::MIN));

        let mut selection = model(isize::MAX, isize::MIN);
        selection.offset(SelectionRange::new(-1, 1));
        assert_eq!(selection.get(), SelectionRange::new(isize::MAX, isize::MIN));
    }

    #[test]
    fn test_size_spans_full_isize_range() {
        assert_eq!(model(isize::MIN, isize::MAX).size(), usize::MAX);
        assert_eq!(model(isize::MAX, isize::MIN).size(), usize::MAX);
    }

    #[test]
    fn test_offset_by_range_forward_is_component_wise() {
        let mut selection = model(5, 10);
        selection.offset(SelectionRange::new(2, 8));
        assert_eq!(selection.get(), SelectionRange::new(7, 18));
        assert_eq!(selection.get_previous(), SelectionRange::new(5, 10));
    }

    #[test]
    fn test_offset_by_range_backward_cross_applies() {
        let mut selection = SelectionModel::from(SelectionRange::new(10, 5));
        assert_eq!(selection.direction(), SelectionDirection::Backward);
        assert_eq!(selection.get_ordered(), SelectionRange::new(5, 10));

        selection.offset(SelectionRange::new(2, 8));

        // delta.end lands on start, delta.start on end
        assert_eq!(selection.get(), SelectionRange::new(18, 7));
        assert_eq!(selection.get_ordered(), SelectionRange::new(7, 18));
    }

    #[test]
    fn test_offset_backward_matches_forward_on_ordered_range() {
        let mut forward = model(5, 10);
        let mut backward = model(10, 5);
        forward.offset(SelectionRange::new(1, 4));
        backward.offset(SelectionRange::new(1, 4));
        assert_eq!(forward.get_ordered(), backward.get_ordered());
    }

    // ============ Save / restore ============

    #[test]
    fn test_save_does_not_change_selection() {
        let mut selection = model(5, 10);
        selection.save();
        assert_eq!(selection.get(), SelectionRange::new(5, 10));
        assert_eq!(
            selection.checkpoint(),
            Some(SavedSelection {
                current: SelectionRange::new(5, 10),
                previous: SelectionRange::new(-1, -1),
            })
        );
    }

    #[test]
    fn test_restore_returns_current_and_previous() {
        let mut selection = model(0, 0);
        selection.set(SelectionRange::new(5, 10));
        selection.save();

        selection.set(SelectionRange::new(20, 30));
        selection.offset(3);
        selection.expand(100);
        selection.restore();

        assert_eq!(selection.get(), SelectionRange::new(5, 10));
        assert_eq!(selection.get_previous(), SelectionRange::new(0, 0));
        assert!(!selection.has_checkpoint());
    }

    #[test]
    fn test_restore_is_single_use() {
        let mut selection = model(5, 10);
        selection.save();
        selection.set(1);
        selection.restore();

        selection.set(SelectionRange::new(40, 50));
        let before = selection.clone();
        selection.restore();
        assert_eq!(selection, before);
    }

    #[test]
    fn test_restore_without_save_is_noop() {
        let mut selection = model(5, 10);
        selection.set(3);
        let before = selection.clone();
        selection.restore();
        assert_eq!(selection, before);
    }

    #[test]
    fn test_save_overwrites_unconsumed_checkpoint() {
        let mut selection = model(5, 10);
        selection.save();
        selection.set(SelectionRange::new(20, 30));
        selection.save();
        selection.set(0);
        selection.restore();
        assert_eq!(selection.get(), SelectionRange::new(20, 30));
        assert_eq!(selection.get_previous(), SelectionRange::new(5, 10));
    }

    // ============ Range input ============

    #[rstest]
    #[case("5", RangeInput::Position(5))]
    #[case(" -3 ", RangeInput::Position(-3))]
    #[case("2..8", RangeInput::Range(SelectionRange::new(2, 8)))]
    #[case("10..5", RangeInput::Range(SelectionRange::new(10, 5)))]
    #[case("-2..-1", RangeInput::Range(SelectionRange::new(-2, -1)))]
    fn test_range_input_parse(#[case] input: &str, #[case] expected: RangeInput) {
        assert_eq!(input.parse::<RangeInput>(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("2..")]
    #[case("..8")]
    #[case("1..2..3")]
    fn test_range_input_parse_rejects(#[case] input: &str) {
        assert!(input.parse::<RangeInput>().is_err());
    }

    #[test]
    fn test_range_input_shape() {
        assert!(!RangeInput::from(4).is_range());
        assert!(RangeInput::from(2..8).is_range());
        assert!(RangeInput::from(&model(1, 2)).is_range());
        assert_eq!(RangeInput::from(4).into_range(), SelectionRange::new(4, 4));
        assert_eq!(RangeInput::from(2..8).into_range(), SelectionRange::new(2, 8));
    }
}
