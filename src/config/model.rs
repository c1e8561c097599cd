//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for refinex-diff.
///
/// This struct represents the contents of `.refinex-diff.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether file header lines (`---`/`+++`) are displayed.
    #[serde(default = "default_true")]
    pub show_header: bool,

    /// Placeholder text for an empty diff.
    #[serde(default = "default_empty_text")]
    pub empty_text: String,

    /// Default output format for `render`.
    #[serde(default)]
    pub format: OutputFormat,

    /// Minimum width of each line-number column.
    #[serde(default = "default_line_number_width")]
    pub line_number_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_header: default_true(),
            empty_text: default_empty_text(),
            format: OutputFormat::default(),
            line_number_width: default_line_number_width(),
        }
    }
}
