use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): extraction completed and the catalog was written
/// - `Error` (2): internal error (parse error, I/O error, config error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
