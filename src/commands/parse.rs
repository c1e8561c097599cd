//! Implementation of the `refinex-diff parse` command.

use super::{read_diff, write_output};
use crate::cli::ParseArgs;
use refinex_diff::error::Result;
use std::io::Write;

/// Print the parsed lines as a JSON array.
pub fn cmd_parse<W: Write>(args: ParseArgs, out: &mut W) -> Result<()> {
    let lines = read_diff(args.input)?;

    let json = if args.compact {
        serde_json::to_string(&lines)?
    } else {
        serde_json::to_string_pretty(&lines)?
    };

    write_output(out, &json)
}
