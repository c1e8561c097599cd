//! Unified diff parsing and display for document version history.
//!
//! The core is [`diff::parse`], a pure function that classifies every line
//! of a unified diff and assigns old/new line numbers. [`render`] turns the
//! result into display rows, and the remaining modules supply the ambient
//! pieces the `refinex-diff` binary needs (config, input sources, git).

pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod input;
pub mod render;

#[cfg(test)]
mod test_support;
