use std::process::ExitCode;

/// Process exit status of an intlid run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every referenced id exists in every locale (0).
    Success,
    /// At least one issue was reported (1).
    Failure,
    /// Configuration, locale file or internal error; nothing was checked (2).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        })
    }
}
