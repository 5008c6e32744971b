use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Scan completed, every file scanned
/// - `Failure` (1): Scan completed but some files could not be parsed or read
/// - `Error` (2): Scan aborted a file on a fatal error, or setup failed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
