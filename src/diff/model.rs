//! Data types produced by the diff parser.

use serde::{Deserialize, Serialize};

/// Classification of a single unified-diff line.
///
/// Exactly one kind applies to each line. The serialized form is snake_case
/// (`no_newline`, not `NoNewline`) so rendered JSON matches what display
/// layers key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// File header line (`--- a/path` or `+++ b/path`).
    Header,
    /// Hunk header line (`@@ -1,2 +1,3 @@`).
    Hunk,
    /// Line present only in the new version.
    Add,
    /// Line present only in the old version.
    Delete,
    /// Unchanged line, or anything the other rules don't claim.
    Context,
    /// `\ No newline at end of file` marker.
    NoNewline,
}

impl LineKind {
    /// One-character gutter marker used by the text renderer.
    ///
    /// Returns `None` for kinds that are displayed without a marker column.
    pub fn marker(self) -> Option<char> {
        match self {
            LineKind::Add => Some('+'),
            LineKind::Delete => Some('-'),
            LineKind::Context => Some(' '),
            LineKind::Header | LineKind::Hunk | LineKind::NoNewline => None,
        }
    }

    /// Whether this kind carries an old-side line number.
    pub fn has_old_number(self) -> bool {
        matches!(self, LineKind::Delete | LineKind::Context)
    }

    /// Whether this kind carries a new-side line number.
    pub fn has_new_number(self) -> bool {
        matches!(self, LineKind::Add | LineKind::Context)
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::Header => write!(f, "header"),
            LineKind::Hunk => write!(f, "hunk"),
            LineKind::Add => write!(f, "add"),
            LineKind::Delete => write!(f, "delete"),
            LineKind::Context => write!(f, "context"),
            LineKind::NoNewline => write!(f, "no_newline"),
        }
    }
}

/// One classified line of a unified diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLine {
    /// What kind of diff line this is.
    pub kind: LineKind,
    /// Display text with the diff marker stripped.
    ///
    /// Header, hunk and no-newline lines keep their raw text, minus any
    /// trailing `\r`.
    pub text: String,
    /// Line number in the old version (delete and context lines only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_line_number: Option<u32>,
    /// Line number in the new version (add and context lines only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_line_number: Option<u32>,
    /// The source line exactly as it appeared in the input, including any `\r`.
    pub raw_text: String,
}

impl ParsedLine {
    /// A line with no line-number association whose text is the raw line.
    pub(crate) fn verbatim(kind: LineKind, raw: &str) -> Self {
        Self {
            kind,
            text: raw.to_string(),
            old_line_number: None,
            new_line_number: None,
            raw_text: raw.to_string(),
        }
    }
}
