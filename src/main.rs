//! Entry point for ji, a kanji lookup tool for the terminal.
//!
//! This binary loads environment variables, parses CLI arguments via [`cli`],
//! runs exactly one dictionary query, and exits non-zero when nothing matched.

mod cli;
mod config;
mod constants;
mod dictionary;
mod filter;
mod format;
mod output;

use std::process::ExitCode;

/// Runs the ji CLI.
///
/// Loads `.env` files (silently ignored if absent), parses command-line
/// arguments into a [`cli::Cli`] struct, and maps the query outcome onto
/// the process exit code: 0 with matches, 1 without or on error.
fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = cli::parse();
    match cli::run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            output::fatal(&err);
            ExitCode::from(1)
        }
    }
}
