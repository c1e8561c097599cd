//! Summary counts over a parsed diff.

use serde::Serialize;

use super::hunk::parse_hunk_header;
use super::model::{LineKind, ParsedLine};

/// Line and hunk counts for a parsed diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    /// Number of `+++` file headers.
    pub files: usize,
    /// Number of hunk lines, well-formed or not.
    pub hunks: usize,
    /// Hunk lines whose header could not be parsed.
    pub malformed_hunks: usize,
    /// Added lines.
    pub additions: usize,
    /// Deleted lines.
    pub deletions: usize,
    /// Context lines.
    pub context: usize,
}

impl DiffStats {
    /// Tally a parsed diff.
    pub fn from_lines(lines: &[ParsedLine]) -> Self {
        lines.iter().fold(Self::default(), |mut stats, line| {
            match line.kind {
                LineKind::Header if line.raw_text.starts_with("+++") => stats.files += 1,
                LineKind::Hunk => {
                    stats.hunks += 1;
                    if parse_hunk_header(&line.raw_text).is_none() {
                        stats.malformed_hunks += 1;
                    }
                }
                LineKind::Add => stats.additions += 1,
                LineKind::Delete => stats.deletions += 1,
                LineKind::Context => stats.context += 1,
                LineKind::Header | LineKind::NoNewline => {}
            }
            stats
        })
    }

    /// True when the diff has no added or deleted lines.
    pub fn is_unchanged(&self) -> bool {
        self.additions == 0 && self.deletions == 0
    }
}

impl std::fmt::Display for DiffStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} file(s), {} hunk(s), ", self.files, self.hunks)?;
        if self.is_unchanged() {
            write!(f, "no changes")
        } else {
            write!(f, "+{} -{}", self.additions, self.deletions)
        }
    }
}
