//! Command implementations for refinex-diff.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the input and output plumbing they share.

mod parse;
mod render;
mod stats;

use crate::cli::{Command, InputArgs};
use refinex_diff::config::Config;
use refinex_diff::diff::{DiffStats, ParsedLine, parse};
use refinex_diff::error::{DiffViewError, Result};
use refinex_diff::input::InputSource;
use std::io::Write;
use std::path::Path;

/// Dispatch a command to its implementation.
///
/// Output goes to stdout; errors are returned for `main` to report.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Parse(args) => parse::cmd_parse(args, &mut out),
        Command::Render(args) => render::cmd_render(args, config, &mut out),
        Command::Stats(args) => stats::cmd_stats(args, &mut out),
    }
}

/// Load the explicit config file, or discover one in the current directory.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::discover("."),
    }
}

/// Read and parse the diff named by the input arguments.
fn read_diff(input: InputArgs) -> Result<Vec<ParsedLine>> {
    let source = InputSource::from_args(input.input, input.git, input.repo);
    let text = source.read()?;
    let lines = parse(&text);

    let malformed = DiffStats::from_lines(&lines).malformed_hunks;
    if malformed > 0 {
        log::warn!(
            "{} hunk header(s) in {} could not be parsed; line numbers after them may be wrong",
            malformed,
            source
        );
    }

    log::info!("parsed {} line(s) from {}", lines.len(), source);
    Ok(lines)
}

/// Write `text` followed by a newline unless it already ends with one.
fn write_output<W: Write>(out: &mut W, text: &str) -> Result<()> {
    let io_err = |e: std::io::Error| DiffViewError::OutputError(e.to_string());

    out.write_all(text.as_bytes()).map_err(io_err)?;
    if !text.is_empty() && !text.ends_with('\n') {
        out.write_all(b"\n").map_err(io_err)?;
    }
    out.flush().map_err(io_err)
}
