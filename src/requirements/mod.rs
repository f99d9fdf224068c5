//! Requirement detection for the bootstrap.
//!
//! Two requirements gate project generation: a scripting runtime of at
//! least a minimum version, and the Premake build-configuration generator.
//!
//! # Modules
//!
//! - [`runtime`] - Runtime version validation (fatal on failure)
//! - [`build_tool`] - Build tool presence check (boolean)
//! - [`probe`] - Binary lookup in vendor directories and on PATH
//! - [`version`] - Version extraction and comparison
//! - [`status`] - Report types for `bitengine-setup check`

pub mod build_tool;
pub mod probe;
pub mod runtime;
pub mod status;
pub mod version;

pub use build_tool::{BinaryLocator, BuildToolCheck};
pub use runtime::{InterpreterCheck, RuntimeCheck, RuntimeReport};
pub use status::{RequirementReport, RequirementResult, RequirementStatus};
pub use version::ToolVersion;

use std::path::Path;

/// Run both checks without aborting and collect a report.
pub fn check_requirements(
    root: &Path,
    runtime: &dyn RuntimeCheck,
    build_tool: &dyn BuildToolCheck,
) -> RequirementReport {
    let runtime_status = match runtime.validate(root) {
        Ok(report) => RequirementStatus::Satisfied {
            version: Some(report.version.to_string()),
            path: None,
        },
        Err(e) => RequirementStatus::Unsatisfied {
            reason: e.to_string(),
        },
    };

    let build_tool_status = match build_tool.locate(root) {
        Some(path) => RequirementStatus::Satisfied {
            version: None,
            path: Some(path),
        },
        None => RequirementStatus::Unsatisfied {
            reason: format!("{} is not installed", build_tool.name()),
        },
    };

    RequirementReport {
        root: root.to_path_buf(),
        requirements: vec![
            RequirementResult {
                requirement: runtime.name().to_string(),
                status: runtime_status,
            },
            RequirementResult {
                requirement: build_tool.name().to_string(),
                status: build_tool_status,
            },
        ],
    }
}
