//! Configuration types and defaults for refinex-diff.

use crate::render::{DEFAULT_EMPTY_TEXT, DEFAULT_LINE_NUMBER_WIDTH};
use serde::{Deserialize, Serialize};

/// Output format for the `render` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Two-column line-number text table (default).
    #[default]
    Table,
    /// JSON array of display rows.
    Json,
}

/// Largest accepted `line_number_width`.
pub const MAX_LINE_NUMBER_WIDTH: usize = 10;

pub fn default_true() -> bool {
    true
}

pub fn default_empty_text() -> String {
    DEFAULT_EMPTY_TEXT.to_string()
}

pub fn default_line_number_width() -> usize {
    DEFAULT_LINE_NUMBER_WIDTH
}
