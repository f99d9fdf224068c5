//! Run command implementation.
//!
//! `bitengine-setup run` (or no subcommand) performs the full bootstrap.

use std::path::{Path, PathBuf};

use crate::bootstrap::{DefaultCollaborators, Outcome};
use crate::config::load_config;
use crate::error::Result;
use crate::shell::GenerationSupport;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config_override: Option<&Path>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_override.as_deref())?;
        let support = GenerationSupport::for_current_host(config.generator.platform);
        tracing::debug!(
            "Generation targets {} ({:?} here)",
            config.generator.platform,
            support
        );

        let collaborators = DefaultCollaborators::from_config(&config)?;
        let outcome = collaborators
            .bootstrap(&self.project_root, &config, support)
            .run(ui)?;

        match outcome {
            Outcome::Completed { generated } => {
                tracing::debug!("Setup finished (generated: {})", generated)
            }
            Outcome::BuildToolMissing => tracing::debug!("Setup stopped: build tool missing"),
        }

        // A missing build tool is reported, not failed.
        Ok(CommandResult::success())
    }
}
