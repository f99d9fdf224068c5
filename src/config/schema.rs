//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to
//! `.bitengine/setup.yml`. Every field has a default, so an empty file
//! (or no file at all) describes the stock BitEngine setup.

use serde::Deserialize;
use std::path::PathBuf;

use crate::shell::HostOs;

/// Root configuration structure for setup.yml
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Project name used in status messages
    pub app_name: String,

    /// Scripting runtime that must be present
    pub runtime: RuntimeConfig,

    /// Build-configuration generator that must be present
    pub build_tool: BuildToolConfig,

    /// Platform-specific project generation step
    pub generator: GeneratorConfig,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            app_name: "BitEngine".to_string(),
            runtime: RuntimeConfig::default(),
            build_tool: BuildToolConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

/// Scripting runtime requirement
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Display name (e.g., "Python")
    pub name: String,

    /// Executable to probe with `--version`
    pub command: String,

    /// Lowest acceptable version, `major.minor[.patch]`
    pub minimum_version: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        let command = if cfg!(windows) { "python" } else { "python3" };
        Self {
            name: "Python".to_string(),
            command: command.to_string(),
            minimum_version: "3.3".to_string(),
        }
    }
}

/// Build tool requirement
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuildToolConfig {
    /// Display name (e.g., "Premake")
    pub name: String,

    /// Binary name without platform suffix
    pub binary: String,

    /// Directories searched first, relative to the project root
    pub search_paths: Vec<PathBuf>,

    /// Fall back to the system PATH
    pub use_system_path: bool,
}

impl Default for BuildToolConfig {
    fn default() -> Self {
        Self {
            name: "Premake".to_string(),
            binary: "premake5".to_string(),
            search_paths: vec![PathBuf::from("vendor/premake/bin")],
            use_system_path: true,
        }
    }
}

/// Project generation step
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Script path relative to the project root
    pub script: PathBuf,

    /// Arguments passed to the script
    pub args: Vec<String>,

    /// The only platform the script runs on
    pub platform: HostOs,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            script: PathBuf::from("Scripts/Win-GenProjects.bat"),
            args: vec!["nopause".to_string()],
            platform: HostOs::Windows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_stock_setup() {
        let config = SetupConfig::default();
        assert_eq!(config.app_name, "BitEngine");
        assert_eq!(config.runtime.name, "Python");
        assert_eq!(config.runtime.minimum_version, "3.3");
        assert_eq!(config.build_tool.binary, "premake5");
        assert_eq!(
            config.build_tool.search_paths,
            vec![PathBuf::from("vendor/premake/bin")]
        );
        assert_eq!(
            config.generator.script,
            PathBuf::from("Scripts/Win-GenProjects.bat")
        );
        assert_eq!(config.generator.args, vec!["nopause".to_string()]);
        assert_eq!(config.generator.platform, HostOs::Windows);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config: SetupConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, SetupConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let yaml = r#"
runtime:
  minimum_version: "3.8"
generator:
  platform: linux
"#;
        let config: SetupConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.runtime.minimum_version, "3.8");
        assert_eq!(config.runtime.name, "Python");
        assert_eq!(config.generator.platform, HostOs::Linux);
        assert_eq!(config.generator.args, vec!["nopause".to_string()]);
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let yaml = "generator:\n  platform: amiga\n";
        assert!(serde_yaml::from_str::<SetupConfig>(yaml).is_err());
    }
}
