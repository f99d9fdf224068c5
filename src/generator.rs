//! Project file generation.
//!
//! The generator is an external script shipped with the engine
//! (`Scripts/Win-GenProjects.bat` by default). It runs in the foreground
//! with the console inherited, so Premake's own output is shown as-is.

use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::{Result, SetupError};
use crate::shell::{run_program, CommandOptions};

/// What happened when the generator ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Script that was launched
    pub script: PathBuf,
    /// Exit code (None if killed by signal)
    pub exit_code: Option<i32>,
}

/// Launches project generation for the project at `root`.
pub trait ProjectGenerator {
    /// Run the generator to completion.
    ///
    /// Errors only when the generator cannot be started.
    fn generate(&self, root: &Path) -> Result<GenerationReport>;
}

/// Runs a root-relative script with fixed arguments.
#[derive(Debug, Clone)]
pub struct ScriptGenerator {
    script: PathBuf,
    args: Vec<String>,
}

impl ScriptGenerator {
    pub fn new(script: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            script: script.into(),
            args,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(&config.script, config.args.clone())
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl ProjectGenerator for ScriptGenerator {
    fn generate(&self, root: &Path) -> Result<GenerationReport> {
        let script = root.join(&self.script);
        let options = CommandOptions::inherited().in_dir(root);

        let result = run_program(&script, &self.args, &options).map_err(|e| {
            SetupError::GeneratorLaunchFailed {
                script: script.clone(),
                message: e.to_string(),
            }
        })?;

        if !result.success {
            tracing::warn!(
                "{} exited with code {:?}",
                self.script.display(),
                result.exit_code
            );
        }

        Ok(GenerationReport {
            script,
            exit_code: result.exit_code,
        })
    }
}
