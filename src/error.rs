//! Error types for setup operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the tool, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Runtime failures (`RuntimeMissing`, `RuntimeTooOld`, `RuntimeCheckFailed`)
//!   are fatal and end the bootstrap with a non-zero exit code
//! - A missing build tool is NOT an error; it is an outcome of the run
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for setup operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The requested repository root does not exist.
    #[error("Project root not found: {path}")]
    RootNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The scripting runtime could not be launched at all.
    #[error("{runtime} is required but could not be run: {message}")]
    RuntimeMissing { runtime: String, message: String },

    /// The scripting runtime is older than the required minimum.
    #[error("{runtime} {found} is installed, but {required} or newer is required")]
    RuntimeTooOld {
        runtime: String,
        found: String,
        required: String,
    },

    /// The runtime ran but its version could not be determined.
    #[error("Could not determine {runtime} version: {message}")]
    RuntimeCheckFailed { runtime: String, message: String },

    /// The project generator could not be started.
    #[error("Failed to launch project generator {script}: {message}")]
    GeneratorLaunchFailed { script: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SetupError {
    /// Whether this error comes from runtime-version validation.
    pub fn is_runtime_failure(&self) -> bool {
        matches!(
            self,
            SetupError::RuntimeMissing { .. }
                | SetupError::RuntimeTooOld { .. }
                | SetupError::RuntimeCheckFailed { .. }
        )
    }
}

/// Result type alias for setup operations.
pub type Result<T> = std::result::Result<T, SetupError>;
