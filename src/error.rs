use std::fmt;
use std::process::ExitCode;

/// Process exit status for each way a glass run can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Bad command line: no level path, no `--config`, unknown flag.
    Usage = 1,
    /// The level or glass config could not be read or parsed, or the config is incomplete.
    Input = 2,
    /// A pane failed without `--keep-going`, or the built level could not be written.
    Processing = 3,
}

impl From<ErrorCode> for ExitCode {
    fn from(code: ErrorCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// A failed run: the exit status plus the message logged before exiting.
#[derive(Debug)]
pub struct CliError {
    pub code: ErrorCode,
    pub message: String,
}

impl CliError {
    /// Loading failed; `err` carries the file path in its context chain.
    pub fn input(err: &anyhow::Error) -> Self {
        Self {
            code: ErrorCode::Input,
            message: format!("{err:#}"),
        }
    }

    /// A pane or the output write failed.
    pub fn processing(message: impl fmt::Display) -> Self {
        Self {
            code: ErrorCode::Processing,
            message: format!("{message:#}"),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}
