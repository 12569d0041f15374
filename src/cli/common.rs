//! Shared CLI types: exit codes, errors and JSON response shapes.

use serde::Serialize;
use std::fmt;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was read but failed validation
    ValidationFailed = 1,
    /// File could not be read, parsed or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a command's `execute`.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Exit code the process should terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationFailed,
            message: message.into(),
        }
    }

    /// I/O or parse failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// JSON output of `validate --json`.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    /// True when no errors were found
    pub valid: bool,
    /// Where the form came from (`built-in` or a file path)
    pub source: String,
    /// Errors and warnings in report order
    pub errors: Vec<ValidationMessage>,
    /// Per-area status
    pub checks: ValidationChecks,
}

/// One validation finding.
#[derive(Debug, Serialize)]
pub struct ValidationMessage {
    /// `error` or `warning`
    pub severity: String,
    /// Error kind, absent for warnings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Human-readable message
    pub message: String,
    /// Element path, e.g. `[1].items[0]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Status per validation area: `passed`, `warning` or `failed`.
#[derive(Debug, Serialize)]
pub struct ValidationChecks {
    /// Message key checks
    pub message_keys: String,
    /// Element structure checks
    pub structure: String,
}

impl ValidationChecks {
    /// All areas passed.
    #[must_use]
    pub fn all_passed() -> Self {
        Self {
            message_keys: "passed".to_string(),
            structure: "passed".to_string(),
        }
    }
}
