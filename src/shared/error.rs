use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no circular dependencies detected
    Success = 0,
    /// At least one circular dependency chain was detected
    CyclesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (provider failure, parse error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::CyclesDetected => write!(f, "Cycles Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while checking for circular dependencies.
///
/// Every variant names the stage that failed. `CacheRead` and `CachePersist`
/// are non-fatal: the use case turns them into a cache miss or a warning and
/// they never reach the caller.
#[derive(Debug, Error)]
pub enum CycleCheckError {
    #[error("Failed to parse dependency record #{position}\nDetails: {details}\n\n💡 Hint: The metadata provider must emit a stream of JSON objects with an \"ImportPath\" and optional \"Imports\" list")]
    Parse { position: usize, details: String },

    #[error("The metadata provider returned no dependency records\n\n💡 Hint: Check that the project root is correct and that the provider command lists at least one module")]
    NoRecords,

    #[error("Metadata provider failed: {command}\nDetails: {details}")]
    ExternalTool { command: String, details: String },

    #[error("Metadata provider timed out after {}s: {command}\n\n💡 Hint: Increase the timeout with --timeout-secs", .timeout.as_secs())]
    ExternalToolTimeout { command: String, timeout: Duration },

    #[error("Failed to read cache file: {path}\nDetails: {details}")]
    CacheRead { path: PathBuf, details: String },

    #[error("Failed to write cache file: {path}\nDetails: {details}")]
    CachePersist { path: PathBuf, details: String },

    #[error("Failed to read manifest timestamp: {path}\nDetails: {details}\n\n💡 Hint: Point --manifest at the project's module manifest (e.g. go.mod)")]
    Manifest { path: PathBuf, details: String },

    #[error("Failed to write report: {path}\nDetails: {details}")]
    OutputWrite { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for configuration values and domain invariants
    #[error("Validation error: {message}")]
    Validation { message: String },
}
