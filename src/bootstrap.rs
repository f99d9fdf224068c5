//! The bootstrap sequence.
//!
//! 1. Validate the scripting runtime (fatal on failure)
//! 2. Check for the build tool (a missing tool ends the run cleanly)
//! 3. Generate project files if the host is the generator's platform
//! 4. Report completion
//!
//! The repository root is handed to every collaborator explicitly; the
//! process working directory is left alone.

use std::path::{Path, PathBuf};

use crate::config::SetupConfig;
use crate::error::Result;
use crate::generator::{ProjectGenerator, ScriptGenerator};
use crate::requirements::{BinaryLocator, BuildToolCheck, InterpreterCheck, RuntimeCheck};
use crate::shell::GenerationSupport;
use crate::ui::UserInterface;

/// Message printed when setup finishes with the build tool present.
pub const COMPLETED_MESSAGE: &str = "Setup completed!";

/// How a bootstrap run ended, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The build tool was present. `generated` is false when the host is
    /// not the generator's platform; completion is reported either way.
    Completed { generated: bool },
    /// The build tool is missing; nothing was generated.
    BuildToolMissing,
}

impl Outcome {
    pub fn generated(&self) -> bool {
        matches!(self, Outcome::Completed { generated: true })
    }
}

/// One bootstrap run over a fixed root and set of collaborators.
pub struct Bootstrap<'a> {
    root: PathBuf,
    app_name: String,
    runtime: &'a dyn RuntimeCheck,
    build_tool: &'a dyn BuildToolCheck,
    generator: &'a dyn ProjectGenerator,
    support: GenerationSupport,
}

impl<'a> Bootstrap<'a> {
    pub fn new(
        root: impl Into<PathBuf>,
        runtime: &'a dyn RuntimeCheck,
        build_tool: &'a dyn BuildToolCheck,
        generator: &'a dyn ProjectGenerator,
        support: GenerationSupport,
    ) -> Self {
        Self {
            root: root.into(),
            app_name: "BitEngine".to_string(),
            runtime,
            build_tool,
            generator,
            support,
        }
    }

    /// Set the project name used in the missing-tool diagnostic.
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run the sequence.
    ///
    /// Nothing is written to `ui` before the runtime check passes, so a
    /// runtime failure is the first and only thing the user sees.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<Outcome> {
        let runtime = self.runtime.validate(&self.root)?;
        tracing::debug!("{} {} accepted", runtime.name, runtime.version);

        if !self.build_tool.is_installed(&self.root) {
            ui.message(&format!(
                "{} requires {} to generate project files.",
                self.app_name,
                self.build_tool.name()
            ));
            return Ok(Outcome::BuildToolMissing);
        }

        let generated = match self.support {
            GenerationSupport::Supported => {
                ui.progress(&format!(
                    "Running {}...",
                    self.build_tool.name().to_lowercase()
                ));
                let report = self.generator.generate(&self.root)?;
                tracing::debug!(
                    "{} finished with exit code {:?}",
                    report.script.display(),
                    report.exit_code
                );
                true
            }
            GenerationSupport::Unsupported => {
                tracing::debug!("Project generation is not available on this platform");
                false
            }
        };

        // Printed even when generation was skipped for the platform.
        ui.success(COMPLETED_MESSAGE);
        Ok(Outcome::Completed { generated })
    }
}

/// The stock collaborators, built from configuration.
#[derive(Debug, Clone)]
pub struct DefaultCollaborators {
    pub runtime: InterpreterCheck,
    pub build_tool: BinaryLocator,
    pub generator: ScriptGenerator,
}

impl DefaultCollaborators {
    pub fn from_config(config: &SetupConfig) -> Result<Self> {
        Ok(Self {
            runtime: InterpreterCheck::from_config(&config.runtime)?,
            build_tool: BinaryLocator::from_config(&config.build_tool),
            generator: ScriptGenerator::from_config(&config.generator),
        })
    }

    /// Wire these collaborators into a bootstrap run.
    pub fn bootstrap<'a>(
        &'a self,
        root: &Path,
        config: &SetupConfig,
        support: GenerationSupport,
    ) -> Bootstrap<'a> {
        Bootstrap::new(
            root,
            &self.runtime,
            &self.build_tool,
            &self.generator,
            support,
        )
        .with_app_name(&config.app_name)
    }
}
