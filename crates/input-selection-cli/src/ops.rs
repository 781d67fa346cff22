use anyhow::{Context, Result, bail};
use input_selection_engine::{
    LineAndColumn, RangeInput, SelectionDirection, SelectionModel, signed_line_column_to_offset,
};
use std::str::FromStr;

/// One selection operation given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Set {
        input: RangeInput,
        direction: Option<SelectionDirection>,
    },
    Expand(RangeInput),
    End(isize),
    Offset(RangeInput),
    Save,
    Restore,
    /// Collapse onto a line/column; negative values clamp.
    Caret { line: isize, col: isize },
}

impl FromStr for Op {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let op = match (name, args.as_slice()) {
            ("set", [input]) => Op::Set {
                input: input.parse()?,
                direction: None,
            },
            ("set", [input, direction]) => Op::Set {
                input: input.parse()?,
                direction: Some(direction.parse()?),
            },
            ("expand", [input]) => Op::Expand(input.parse()?),
            ("end", [pos]) => Op::End(
                pos.trim()
                    .parse()
                    .with_context(|| format!("Invalid end position {pos:?}"))?,
            ),
            ("offset", [delta]) => Op::Offset(delta.parse()?),
            ("save", []) => Op::Save,
            ("restore", []) => Op::Restore,
            ("caret", [line, col]) => Op::Caret {
                line: line
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid line {line:?}"))?,
                col: col
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid column {col:?}"))?,
            },
            _ => bail!("Unknown operation {s:?}"),
        };

        Ok(op)
    }
}

impl Op {
    pub fn apply(&self, selection: &mut SelectionModel, text: &str) {
        match *self {
            Op::Set {
                input,
                direction: Some(direction),
            } => selection.set_directed(input, direction),
            Op::Set {
                input,
                direction: None,
            } => selection.set(input),
            Op::Expand(input) => selection.expand(input),
            Op::End(pos) => selection.set_end(pos),
            Op::Offset(delta) => selection.offset(delta),
            Op::Save => selection.save(),
            Op::Restore => selection.restore(),
            Op::Caret { line, col } => {
                let offset = signed_line_column_to_offset(text, line, col);
                selection.set(offset as isize);
            }
        }
    }
}

fn display_point(point: LineAndColumn, one_based: bool) -> String {
    if one_based {
        format!("{}:{}", point.line + 1, point.col + 1)
    } else {
        point.to_string()
    }
}

/// Single-line status for `selection` against `text`.
pub fn describe(selection: &SelectionModel, text: &str, one_based: bool) -> String {
    let range = selection.get();
    let ordered = selection.get_ordered();
    let previous = selection.get_previous();
    let coords = selection.coordinates(text).get_ordered();

    format!(
        "range={}..{} ordered={}..{} direction={} size={} previous={}..{} lines={}-{}",
        range.start,
        range.end,
        ordered.start,
        ordered.end,
        selection.direction(),
        selection.size(),
        previous.start,
        previous.end,
        display_point(coords.start, one_based),
        display_point(coords.end, one_based),
    )
}
