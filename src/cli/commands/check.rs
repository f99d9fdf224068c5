//! Check command implementation.
//!
//! `bitengine-setup check` runs both requirement checks without generating
//! anything. Unlike `run`, an unusable runtime is reported, not fatal.

use std::path::{Path, PathBuf};

use crate::bootstrap::DefaultCollaborators;
use crate::cli::args::CheckArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::requirements::{check_requirements, RequirementReport, RequirementStatus};
use crate::shell::GenerationSupport;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

/// Write a human-readable report.
fn show_report(
    ui: &mut dyn UserInterface,
    app_name: &str,
    report: &RequirementReport,
    support: GenerationSupport,
) {
    ui.show_header(&format!("{} - Requirements", app_name));

    for entry in &report.requirements {
        match &entry.status {
            RequirementStatus::Satisfied { version, path } => {
                let detail = match (version, path) {
                    (Some(v), _) => format!("{} {}", entry.requirement, v),
                    (None, Some(p)) if ui.output_mode().shows_details() => {
                        format!("{} ({})", entry.requirement, p.display())
                    }
                    _ => entry.requirement.clone(),
                };
                ui.success(&detail);
            }
            RequirementStatus::Unsatisfied { reason } => {
                ui.error(&format!("{}: {}", entry.requirement, reason));
            }
        }
    }

    if !support.is_supported() {
        ui.message("Project generation is not available on this platform.");
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_override.as_deref())?;
        let collaborators = DefaultCollaborators::from_config(&config)?;
        let support = GenerationSupport::for_current_host(config.generator.platform);

        let report = check_requirements(
            &self.project_root,
            &collaborators.runtime,
            &collaborators.build_tool,
        );

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            println!("{}", json);
        } else {
            show_report(ui, &config.app_name, &report, support);
        }

        if report.all_satisfied() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
