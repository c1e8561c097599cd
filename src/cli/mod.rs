//! CLI argument parsing for refinex-diff.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use refinex_diff::config::OutputFormat;
use std::path::PathBuf;

/// Refinex diff viewer: parse and display unified diffs of document versions.
///
/// Each diff line is classified (header, hunk, add, delete, context,
/// no-newline marker) and given old/new line numbers for a two-column view.
#[derive(Parser, Debug)]
#[command(name = "refinex-diff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file to use instead of ./.refinex-diff.yaml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for info, -vv for debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for refinex-diff.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a diff and print the classified lines as JSON.
    Parse(ParseArgs),

    /// Render a diff as a line-numbered table (or JSON display rows).
    Render(RenderArgs),

    /// Print file, hunk and line counts for a diff.
    Stats(StatsArgs),
}

/// Where to read the diff from. Shared by every command.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Diff file to read. Omit or pass `-` to read stdin.
    pub input: Option<PathBuf>,

    /// Run `git diff` over RANGE instead of reading a file.
    ///
    /// With no RANGE, diffs the working tree against the index.
    #[arg(long, value_name = "RANGE", num_args = 0..=1, default_missing_value = "")]
    pub git: Option<String>,

    /// Repository to run `git diff` in.
    #[arg(long, default_value = ".", requires = "git")]
    pub repo: PathBuf,
}

/// Arguments for the `parse` command.
#[derive(Parser, Debug)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print JSON on a single line.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Hide `---`/`+++` file header lines.
    #[arg(long)]
    pub no_header: bool,

    /// Placeholder printed when the diff is empty.
    #[arg(long, value_name = "TEXT")]
    pub empty_text: Option<String>,

    /// Output format (defaults to the config's `format`).
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `stats` command.
#[derive(Parser, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the counts as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
