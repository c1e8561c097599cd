//! Implementation of the `refinex-diff stats` command.

use super::{read_diff, write_output};
use crate::cli::StatsArgs;
use refinex_diff::diff::DiffStats;
use refinex_diff::error::Result;
use std::io::Write;

/// Print summary counts for the diff.
pub fn cmd_stats<W: Write>(args: StatsArgs, out: &mut W) -> Result<()> {
    let lines = read_diff(args.input)?;
    let stats = DiffStats::from_lines(&lines);

    let text = if args.json {
        serde_json::to_string_pretty(&stats)?
    } else {
        stats.to_string()
    };

    write_output(out, &text)
}
