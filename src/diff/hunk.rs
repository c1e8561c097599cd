//! Hunk header parsing and running line-number counters.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `@@ -old_start[,old_count] +new_start[,new_count] @@[ section]`.
static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@(.*)$")
        .expect("Invalid hunk header regex")
});

/// The numeric ranges declared by a hunk header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunkHeader {
    /// First line of the hunk in the old version.
    pub old_start: u32,
    /// Number of old lines covered, when the header spells it out.
    pub old_count: Option<u32>,
    /// First line of the hunk in the new version.
    pub new_start: u32,
    /// Number of new lines covered, when the header spells it out.
    pub new_count: Option<u32>,
    /// Trailing section text after the closing `@@` (usually a function signature).
    pub section: Option<String>,
}

/// Parse a hunk header line.
///
/// Formats accepted:
/// - `@@ -10,2 +10,3 @@`
/// - `@@ -10 +10 @@` (counts omitted)
/// - `@@ -10,2 +10,3 @@ fn existing_function() {`
///
/// Returns `None` when the line does not match. Line numbers are capped at
/// `u32`: a start or count value above `u32::MAX` is a deliberate limit and
/// rejects the header like any other malformed one, so the parser keeps its
/// previous counters. Count values are otherwise informational.
pub fn parse_hunk_header(line: &str) -> Option<HunkHeader> {
    let caps = HUNK_HEADER_REGEX.captures(line)?;

    let old_start = caps[1].parse().ok()?;
    let new_start = caps[3].parse().ok()?;
    let old_count = caps
        .get(2)
        .map(|m| m.as_str().parse::<u32>())
        .transpose()
        .ok()?;
    let new_count = caps
        .get(4)
        .map(|m| m.as_str().parse::<u32>())
        .transpose()
        .ok()?;

    let section = caps
        .get(5)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Some(HunkHeader {
        old_start,
        old_count,
        new_start,
        new_count,
        section,
    })
}

/// Running old/new line numbers threaded through the parser fold.
///
/// Both counters start at 0 until the first well-formed hunk header is seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineCounters {
    /// Next line number on the old side.
    pub old: u32,
    /// Next line number on the new side.
    pub new: u32,
}

impl LineCounters {
    /// Counters seeded from a hunk header's start values.
    pub fn at_hunk(header: &HunkHeader) -> Self {
        Self {
            old: header.old_start,
            new: header.new_start,
        }
    }

    /// Advance the old-side counter by one line.
    pub fn next_old(self) -> Self {
        Self {
            old: self.old.saturating_add(1),
            ..self
        }
    }

    /// Advance the new-side counter by one line.
    pub fn next_new(self) -> Self {
        Self {
            new: self.new.saturating_add(1),
            ..self
        }
    }

    /// Advance both counters by one line.
    pub fn next_both(self) -> Self {
        self.next_old().next_new()
    }
}
