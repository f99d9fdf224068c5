//! External program execution.
//!
//! Programs are started directly (no intermediate shell) so that paths with
//! spaces and literal flag arguments reach the child untouched.

use crate::error::Result;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Result of executing an external program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }

    /// Captured stdout followed by captured stderr.
    ///
    /// Some interpreters print `--version` to stderr, so version probes
    /// look at both.
    pub fn combined_output(&self) -> String {
        let mut out = self.stdout.clone();
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&self.stderr);
        out
    }
}

/// Options for program execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

impl CommandOptions {
    /// Options that capture both streams.
    pub fn captured() -> Self {
        Self {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        }
    }

    /// Options that inherit the parent's console.
    pub fn inherited() -> Self {
        Self::default()
    }

    /// Set the working directory.
    pub fn in_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

/// Run a program to completion and wait for it.
///
/// There is no timeout: the call blocks until the child exits. An error is
/// returned only when the program cannot be started; a non-zero exit is
/// reported through [`CommandResult`].
pub fn run_program<P, I, S>(program: P, args: I, options: &CommandOptions) -> Result<CommandResult>
where
    P: AsRef<OsStr>,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program.as_ref());
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::inherit());

    if options.capture_stdout {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
    }

    if options.capture_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    tracing::debug!("Running {:?} (cwd: {:?})", cmd, options.cwd);

    let output = cmd.output()?;

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr))
    } else {
        Ok(CommandResult::failure(output.status.code(), stdout, stderr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetupError;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success("out".into(), "err".into());
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(Some(2), String::new(), "boom".into());
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(2));
    }

    #[test]
    fn combined_output_joins_streams() {
        let result = CommandResult::success("a".into(), "b\n".into());
        assert_eq!(result.combined_output(), "a\nb\n");

        let stderr_only = CommandResult::success(String::new(), "Python 2.7.18\n".into());
        assert_eq!(stderr_only.combined_output(), "Python 2.7.18\n");
    }

    #[test]
    fn options_builders() {
        let captured = CommandOptions::captured().in_dir("/tmp");
        assert!(captured.capture_stdout);
        assert!(captured.capture_stderr);
        assert_eq!(captured.cwd, Some(PathBuf::from("/tmp")));

        let inherited = CommandOptions::inherited();
        assert!(!inherited.capture_stdout);
        assert!(!inherited.capture_stderr);
    }

    #[test]
    fn missing_program_is_an_error() {
        let result = run_program(
            "definitely-not-a-real-program-3f9a",
            ["--version"],
            &CommandOptions::captured(),
        );
        assert!(matches!(result, Err(SetupError::Io(_))));
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_and_exit_code() {
        let result = run_program("sh", ["-c", "echo hello; exit 3"], &CommandOptions::captured())
            .unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_requested_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = run_program(
            "sh",
            ["-c", "pwd"],
            &CommandOptions::captured().in_dir(temp.path()),
        )
        .unwrap();
        let reported = std::fs::canonicalize(result.stdout.trim()).unwrap();
        assert_eq!(reported, std::fs::canonicalize(temp.path()).unwrap());
    }
}
