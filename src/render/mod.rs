//! Display layer for parsed diffs.
//!
//! Converts [`ParsedLine`]s into display rows for a two-column (old/new line
//! number) view, and formats those rows as a plain-text table or JSON.
//! Header visibility and the empty-state placeholder are controlled by
//! [`RenderOptions`].

mod table;


use crate::diff::{LineKind, ParsedLine};
use serde::{Deserialize, Serialize};

pub use table::render_table;

/// Display configuration for a rendered diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Show `---`/`+++` file header lines.
    pub show_header: bool,
    /// Placeholder shown when the diff has no lines.
    pub empty_text: String,
    /// Minimum width of each line-number column.
    pub line_number_width: usize,
}

/// Default placeholder for an empty diff.
pub const DEFAULT_EMPTY_TEXT: &str = "no differences";

/// Default minimum width of the line-number columns.
pub const DEFAULT_LINE_NUMBER_WIDTH: usize = 4;

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_header: true,
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            line_number_width: DEFAULT_LINE_NUMBER_WIDTH,
        }
    }
}

/// One row of the rendered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "row", rename_all = "snake_case")]
pub enum DisplayRow<'a> {
    /// A diff line.
    Line {
        kind: LineKind,
        #[serde(skip_serializing_if = "Option::is_none")]
        old_line_number: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        new_line_number: Option<u32>,
        text: &'a str,
    },
    /// The placeholder shown instead of an empty diff.
    Empty { text: &'a str },
}

/// Select and order the rows to display.
///
/// An empty `lines` slice yields a single [`DisplayRow::Empty`]. Header
/// lines are dropped when `show_header` is off; every other line is kept in
/// order.
pub fn display_rows<'a>(
    lines: &'a [ParsedLine],
    options: &'a RenderOptions,
) -> Vec<DisplayRow<'a>> {
    if lines.is_empty() {
        return vec![DisplayRow::Empty {
            text: &options.empty_text,
        }];
    }

    lines
        .iter()
        .filter(|line| options.show_header || line.kind != LineKind::Header)
        .map(|line| DisplayRow::Line {
            kind: line.kind,
            old_line_number: line.old_line_number,
            new_line_number: line.new_line_number,
            text: &line.text,
        })
        .collect()
}

/// Render the display rows as a JSON array.
pub fn render_json(
    lines: &[ParsedLine],
    options: &RenderOptions,
    pretty: bool,
) -> serde_json::Result<String> {
    let rows = display_rows(lines, options);
    if pretty {
        serde_json::to_string_pretty(&rows)
    } else {
        serde_json::to_string(&rows)
    }
}
