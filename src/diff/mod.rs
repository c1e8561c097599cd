//! Unified diff parsing for document version comparison.
//!
//! Turns the text of a unified diff into an ordered list of classified
//! lines, each carrying the old/new line numbers a two-column display needs.
//!
//! The parsing is a pure function of its input and supports:
//! - File headers (`---` / `+++`)
//! - Hunk headers with or without line counts, resetting line numbers
//! - Added, deleted and context lines with marker stripping
//! - The `\ No newline at end of file` marker
//! - Graceful handling of malformed input (never fails)

mod classify;
mod hunk;
mod model;
mod parser;
mod stats;


// Re-export public API
pub use hunk::{HunkHeader, LineCounters, parse_hunk_header};
pub use model::{LineKind, ParsedLine};
pub use parser::parse;
pub use stats::DiffStats;
