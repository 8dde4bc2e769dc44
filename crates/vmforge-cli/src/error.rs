//! CLI-specific error types and mappings.
//!
//! Handlers return `anyhow::Result`; anything that should end the process
//! with a specific status is raised as a `CliError`, which `main` recovers
//! by downcasting.

use thiserror::Error;
use vmforge_catalog::TemplateScanError;
use vmforge_core::{CoreError, EmptySelection};

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A startup check failed.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// The selection resolved to no templates.
    #[error("Nothing to install: {0}")]
    NothingToInstall(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error (any handler error without a `CliError`)
    /// - 2: Misuse of shell command (reported by clap before dispatch)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NothingToInstall(_) => 65, // EX_DATAERR
            Self::Precondition(_) => 69,     // EX_UNAVAILABLE
            Self::Io(_) => 74,               // EX_IOERR
            Self::Config(_) => 78,           // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Precondition(e) => Self::Precondition(e.to_string()),
            CoreError::Settings(e) => Self::Config(e.to_string()),
            CoreError::Path(e) => Self::Config(e.to_string()),
        }
    }
}

impl From<TemplateScanError> for CliError {
    fn from(err: TemplateScanError) -> Self {
        match err {
            TemplateScanError::DirectoryNotFound(_) | TemplateScanError::NotADirectory(_) => {
                Self::Config(err.to_string())
            }
            TemplateScanError::ReadDir { .. } => Self::Io(err.to_string()),
        }
    }
}

impl From<EmptySelection> for CliError {
    fn from(err: EmptySelection) -> Self {
        Self::NothingToInstall(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error returned from a handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CliError>())
        .map_or(1, CliError::exit_code)
}
