//! Error types for the refinex-diff CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! The parser itself never fails; these errors come from reading input,
//! loading config, running git, and writing output.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for refinex-diff operations.
///
/// Each variant maps to a specific process exit code.
#[derive(Error, Debug)]
pub enum DiffViewError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// The diff input could not be read.
    #[error("Failed to read input: {0}")]
    InputError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// Rendered output could not be produced or written.
    #[error("Failed to write output: {0}")]
    OutputError(String),
}

impl DiffViewError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DiffViewError::UserError(_) => exit_codes::USER_ERROR,
            DiffViewError::InputError(_) => exit_codes::INPUT_FAILURE,
            DiffViewError::GitError(_) => exit_codes::GIT_FAILURE,
            DiffViewError::OutputError(_) => exit_codes::OUTPUT_FAILURE,
        }
    }
}

impl From<serde_json::Error> for DiffViewError {
    fn from(err: serde_json::Error) -> Self {
        DiffViewError::OutputError(format!("JSON serialization failed: {}", err))
    }
}

/// Result type alias for refinex-diff operations.
pub type Result<T> = std::result::Result<T, DiffViewError>;
