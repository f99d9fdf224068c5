//! Requirement status types for the `check` report.
//!
//! Each requirement check produces a `RequirementStatus` that describes
//! whether the tool is available. Unlike `run`, a `check` never aborts on
//! the runtime failure; it is recorded as `Unsatisfied`.

use serde::Serialize;
use std::path::PathBuf;

/// The result of checking a single requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RequirementStatus {
    /// Tool is present and acceptable.
    Satisfied {
        /// Version found, when the check reads one
        #[serde(skip_serializing_if = "Option::is_none")]
        version: Option<String>,
        /// Where the tool was found, when the check locates one
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<PathBuf>,
    },

    /// Tool is missing, too old, or unusable.
    Unsatisfied {
        /// Human-readable reason
        reason: String,
    },
}

impl RequirementStatus {
    /// Whether the requirement is satisfied.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, RequirementStatus::Satisfied { .. })
    }
}

/// A named requirement and its status.
#[derive(Debug, Clone, Serialize)]
pub struct RequirementResult {
    /// Display name of the requirement
    pub requirement: String,
    /// The status of the requirement
    #[serde(flatten)]
    pub status: RequirementStatus,
}

/// All requirement results for a project.
#[derive(Debug, Clone, Serialize)]
pub struct RequirementReport {
    /// Project root the checks ran against
    pub root: PathBuf,
    /// Individual results, runtime first
    pub requirements: Vec<RequirementResult>,
}

impl RequirementReport {
    /// Whether every requirement is satisfied.
    pub fn all_satisfied(&self) -> bool {
        self.requirements.iter().all(|r| r.status.is_satisfied())
    }
}
