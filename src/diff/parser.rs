//! Core diff parsing logic.

use super::classify::classify_line;
use super::hunk::LineCounters;
use super::model::ParsedLine;

/// Parse unified diff text into classified lines.
///
/// Every input line produces exactly one [`ParsedLine`], in input order.
/// Lines are split on `\n`, and a final line terminator does not produce a
/// trailing empty line. A `\r` before the `\n` is left out of `text` but
/// kept in `raw_text`.
///
/// Empty or whitespace-only input yields an empty vector. Nothing here
/// fails: malformed hunk headers leave the line numbers where they were, and
/// lines with unrecognized prefixes are treated as context.
///
/// # Examples
///
/// ```
/// use refinex_diff::diff::{LineKind, parse};
///
/// let lines = parse("@@ -1,2 +1,2 @@\n same\n-old\n+new\n");
///
/// assert_eq!(lines.len(), 4);
/// assert_eq!(lines[2].kind, LineKind::Delete);
/// assert_eq!(lines[2].old_line_number, Some(2));
/// assert_eq!(lines[3].new_line_number, Some(2));
/// ```
pub fn parse(diff_text: &str) -> Vec<ParsedLine> {
    if diff_text.trim().is_empty() {
        return Vec::new();
    }

    let body = diff_text.strip_suffix('\n').unwrap_or(diff_text);
    let (lines, _) = body.split('\n').fold(
        (Vec::new(), LineCounters::default()),
        |(mut lines, counters), raw| {
            let (parsed, counters) = classify_line(raw, counters);
            lines.push(parsed);
            (lines, counters)
        },
    );

    lines
}
