//! CLI-level errors and exit codes.

use thiserror::Error;

use crate::input::InputError;

/// Anything that can stop a run before output is produced.
#[derive(Debug, Error)]
pub enum CliError {
    /// User input failed validation.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The JSON report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Input(_) => 2,
            Self::Report(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
