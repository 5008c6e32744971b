//! Scan summary printed to stderr after the report.
//!
//! Separate from the report itself, which goes to stdout (or a file) as
//! plain JSON, so piping the report stays clean.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::BatchOutcome;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(outcome: &BatchOutcome, verbose: bool) {
    print_to(outcome, verbose, &mut io::stderr().lock());
}

pub fn print_to<W: Write>(outcome: &BatchOutcome, verbose: bool, writer: &mut W) {
    if outcome.skipped_paths > 0 {
        let _ = writeln!(
            writer,
            "{} {} path(s) skipped due to access errors{}",
            "warning:".bold().yellow(),
            outcome.skipped_paths,
            if verbose { "" } else { " (use -v for details)" }
        );
    }

    if outcome.parse_failures > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed",
            "warning:".bold().yellow(),
            outcome.parse_failures
        );
    }

    for err in &outcome.fatal_errors {
        let _ = writeln!(writer, "{} {}", "error:".bold().red(), err);
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} {}, found {} component usage(s)",
            outcome.files_scanned,
            if outcome.files_scanned == 1 {
                "file"
            } else {
                "files"
            },
            outcome.report.instance_count()
        )
        .green()
    );
}
