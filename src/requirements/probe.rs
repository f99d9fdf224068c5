//! Filesystem probes for locating tool binaries.
//!
//! Lookups iterate over directories directly rather than shelling out to
//! `which`/`where`, whose behavior varies across systems.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// File name of a tool binary on this platform (`premake5` or `premake5.exe`).
pub fn binary_file_name(tool: &str) -> String {
    let suffix = std::env::consts::EXE_SUFFIX;
    if suffix.is_empty() || tool.ends_with(suffix) {
        tool.to_string()
    } else {
        format!("{}{}", tool, suffix)
    }
}

/// Resolve a tool's binary path by iterating over directories.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    let file_name = binary_file_name(tool);
    for dir in dirs {
        let candidate = dir.join(&file_name);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Resolve a tool inside directories given relative to a project root.
pub fn resolve_in_root(tool: &str, root: &Path, relative_dirs: &[PathBuf]) -> Option<PathBuf> {
    let dirs: Vec<PathBuf> = relative_dirs.iter().map(|d| root.join(d)).collect();
    resolve_tool_path(tool, &dirs)
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}
