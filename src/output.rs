//! Terminal output for ji.
//!
//! Results go to stdout, diagnostics to stderr, so rendered entries stay
//! pipeable even when a warning is shown.

use colored::Colorize;
use std::io::{self, Write};

/// Print the formatted results joined with the separator, followed by a
/// trailing newline, and flush.
pub fn print_results(rendered: &[String], separator: &str) {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", rendered.join(separator));
    let _ = stdout.flush();
}

/// Report an empty query result on stderr.
pub fn no_matches() {
    eprintln!("{}", "No kanji found.".red());
}

/// Report a fatal error on stderr.
pub fn fatal(err: &anyhow::Error) {
    eprintln!("{} {:#}", "error:".red().bold(), err);
}
