//! Plain-text table rendering.

use super::{DisplayRow, RenderOptions, display_rows};
use crate::diff::ParsedLine;

/// Render a parsed diff as a GitHub-style text table.
///
/// Each row reads `OLD NEW MTEXT` where `OLD`/`NEW` are right-aligned line
/// numbers (blank when the line has none) and `M` is the `+`/`-`/space
/// marker. Header, hunk and no-newline rows have no marker column and show
/// their raw text. Output ends with a newline.
pub fn render_table(lines: &[ParsedLine], options: &RenderOptions) -> String {
    let rows = display_rows(lines, options);
    let width = column_width(lines, options.line_number_width);

    let mut out = String::new();
    for row in rows {
        match row {
            DisplayRow::Empty { text } => {
                out.push_str(text);
            }
            DisplayRow::Line {
                kind,
                old_line_number,
                new_line_number,
                text,
            } => {
                // Only show the columns this kind of line is numbered on.
                let old = old_line_number.filter(|_| kind.has_old_number());
                let new = new_line_number.filter(|_| kind.has_new_number());
                out.push_str(&format!(
                    "{:>width$} {:>width$} ",
                    number_cell(old),
                    number_cell(new),
                ));
                if let Some(marker) = kind.marker() {
                    out.push(marker);
                }
                out.push_str(text);
            }
        }
        out.push('\n');
    }
    out
}

fn number_cell(number: Option<u32>) -> String {
    number.map(|n| n.to_string()).unwrap_or_default()
}

/// Widen the columns when a line number has more digits than the minimum.
fn column_width(lines: &[ParsedLine], minimum: usize) -> usize {
    lines
        .iter()
        .flat_map(|line| [line.old_line_number, line.new_line_number])
        .flatten()
        .map(|n| n.to_string().len())
        .max()
        .unwrap_or(0)
        .max(minimum)
}
