//! Scripting runtime version validation.

use std::path::Path;

use crate::config::RuntimeConfig;
use crate::error::{Result, SetupError};
use crate::shell::{run_program, CommandOptions};

use super::version::ToolVersion;

/// A runtime that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeReport {
    /// Display name (e.g., "Python")
    pub name: String,
    /// Version reported by the runtime
    pub version: ToolVersion,
}

/// Validates that the scripting runtime meets the minimum version.
///
/// Returning an error is fatal for the bootstrap run.
pub trait RuntimeCheck {
    /// Display name used in messages.
    fn name(&self) -> &str;

    /// Validate the runtime, with `root` as the working directory.
    fn validate(&self, root: &Path) -> Result<RuntimeReport>;
}

/// Probes an interpreter with `--version`.
#[derive(Debug, Clone)]
pub struct InterpreterCheck {
    name: String,
    command: String,
    minimum: ToolVersion,
}

impl InterpreterCheck {
    pub fn new(name: impl Into<String>, command: impl Into<String>, minimum: ToolVersion) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            minimum,
        }
    }

    /// Build from the `runtime` config section.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let minimum = config
            .minimum_version
            .parse::<ToolVersion>()
            .map_err(|message| SetupError::ConfigValidationError { message })?;
        Ok(Self::new(&config.name, &config.command, minimum))
    }

    pub fn minimum(&self) -> &ToolVersion {
        &self.minimum
    }
}

impl RuntimeCheck for InterpreterCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, root: &Path) -> Result<RuntimeReport> {
        let options = CommandOptions::captured().in_dir(root);
        let result = run_program(&self.command, ["--version"], &options).map_err(|e| {
            SetupError::RuntimeMissing {
                runtime: self.name.clone(),
                message: format!("'{}': {}", self.command, e),
            }
        })?;

        // Shims print candidate versions on failure; only a clean exit counts.
        if !result.success {
            return Err(SetupError::RuntimeCheckFailed {
                runtime: self.name.clone(),
                message: format!(
                    "'{} --version' exited with code {:?}",
                    self.command, result.exit_code
                ),
            });
        }

        let output = result.combined_output();
        let version =
            ToolVersion::extract(&output).ok_or_else(|| SetupError::RuntimeCheckFailed {
                runtime: self.name.clone(),
                message: format!("'{} --version' printed no version", self.command),
            })?;

        tracing::debug!(
            "{} reports version {} (minimum {})",
            self.name,
            version,
            self.minimum
        );

        if !version.satisfies(&self.minimum) {
            return Err(SetupError::RuntimeTooOld {
                runtime: self.name.clone(),
                found: version.to_string(),
                required: self.minimum.to_string(),
            });
        }

        Ok(RuntimeReport {
            name: self.name.clone(),
            version,
        })
    }
}
