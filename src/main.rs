//! refinex-diff: unified diff viewer for document version history.
//!
//! This is the main entry point for the `refinex-diff` CLI. It parses
//! arguments, sets up logging, loads config, dispatches to the appropriate
//! command handler, and handles errors with proper exit codes.

mod cli;
mod commands;

use cli::Cli;
use refinex_diff::exit_codes;
use std::process::ExitCode;

/// Initialize `env_logger`.
///
/// `RUST_LOG` takes precedence; otherwise `-v` raises the default level
/// from `warn` to `info`, and `-vv` to `debug`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let result = commands::load_config(cli.config.as_deref())
        .and_then(|config| commands::dispatch(cli.command, &config));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
