use colored::Colorize;
use rayon::prelude::*;

use crate::{
    config::Config,
    core::{
        error::ScanError,
        file_scanner::scan_files,
        filter::ScanOptions,
        report::Report,
        scan::{ScanOutcome, scan},
    },
};

/// Aggregated result of scanning a whole source tree.
pub struct BatchOutcome {
    pub report: Report,
    /// Files that parsed and were walked to completion.
    pub files_scanned: usize,
    /// Files the parser rejected; each already produced a stderr warning.
    pub parse_failures: usize,
    /// Fatal errors, one per aborted file. Usages recorded before the abort
    /// are kept in the report.
    pub fatal_errors: Vec<ScanError>,
    /// Paths skipped by the file walk due to access errors.
    pub skipped_paths: usize,
}

enum FileResult {
    Scanned(Report),
    ParseFailed,
    Unreadable,
    Fatal(Report, ScanError),
}

/// Discover and scan every source file under the configured roots.
///
/// Files are scanned in parallel, each into its own partial report, and the
/// partials are merged in sorted path order. The merged report is therefore
/// identical to a sequential scan in that order, whatever the thread
/// scheduling did.
pub fn run_batch(config: &Config, options: &ScanOptions, verbose: bool) -> BatchOutcome {
    let scan_result = scan_files(
        &config.source_root,
        &config.includes,
        &config.ignores,
        config.ignore_test_files,
        verbose,
    );

    let results: Vec<FileResult> = scan_result
        .files
        .par_iter()
        .map(|file_path| {
            let code = match std::fs::read_to_string(file_path) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!(
                        "{} Failed to read {}: {}",
                        "warning:".bold().yellow(),
                        file_path,
                        e
                    );
                    return FileResult::Unreadable;
                }
            };

            let mut partial = Report::new();
            match scan(&code, file_path, options, &mut partial) {
                Ok(ScanOutcome::Scanned) => FileResult::Scanned(partial),
                Ok(ScanOutcome::ParseFailed) => FileResult::ParseFailed,
                // The partial report keeps whatever was recorded before the
                // abort, matching a sequential scan of the same file.
                Err(err) => FileResult::Fatal(partial, err),
            }
        })
        .collect();

    // Sequential merge in file order
    let mut report = Report::new();
    let mut files_scanned = 0;
    let mut parse_failures = 0;
    let mut fatal_errors = Vec::new();

    for result in results {
        match result {
            FileResult::Scanned(partial) => {
                report.merge(partial);
                files_scanned += 1;
            }
            FileResult::ParseFailed => parse_failures += 1,
            FileResult::Unreadable => parse_failures += 1,
            FileResult::Fatal(partial, err) => {
                report.merge(partial);
                fatal_errors.push(err);
            }
        }
    }

    BatchOutcome {
        report,
        files_scanned,
        parse_failures,
        fatal_errors,
        skipped_paths: scan_result.skipped_count,
    }
}
