//! Configuration validation rules.
//!
//! - The runtime command must be non-empty
//! - The minimum runtime version must parse as `major.minor[.patch]`
//! - The build tool binary must be non-empty
//! - The generator script path must be non-empty

use crate::config::schema::SetupConfig;
use crate::error::{Result, SetupError};
use crate::requirements::ToolVersion;
use std::fmt;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Dotted config key the error refers to
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &SetupConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.runtime.command.trim().is_empty() {
        errors.push(ValidationError {
            field: "runtime.command".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    if let Err(e) = config.runtime.minimum_version.parse::<ToolVersion>() {
        errors.push(ValidationError {
            field: "runtime.minimum_version".to_string(),
            message: e,
        });
    }

    if config.build_tool.binary.trim().is_empty() {
        errors.push(ValidationError {
            field: "build_tool.binary".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    if config.generator.script.as_os_str().is_empty() {
        errors.push(ValidationError {
            field: "generator.script".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    errors
}

/// Validate a configuration, failing with all messages joined.
pub fn validate(config: &SetupConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(ToString::to_string).collect();
        Err(SetupError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
