//! Integration tests for the bitengine-setup binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("bitengine-setup"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Validate the BitEngine toolchain"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("bitengine-setup"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_invalid_command_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("bitengine-setup"));
    cmd.arg("invalid-command");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_missing_project_root_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempfile::TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("bitengine-setup"));
    cmd.current_dir(temp.path());
    cmd.args(["--project", "does-not-exist"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Project root not found"));
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("bitengine-setup"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bitengine-setup"));
    Ok(())
}

#[cfg(unix)]
mod unix {
    use super::*;
    use bitengine_setup::shell::HostOs;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    const MISSING_PREMAKE: &str = "BitEngine requires Premake to generate project files.";

    fn write_executable(path: &Path, body: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// A fake engine checkout.
    ///
    /// `python_version` is what the fake interpreter reports. The generator
    /// script logs its arguments and working directory to `generated.log`.
    fn setup_project(python_version: &str, with_premake: bool, platform: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        let python = root.join("tools/python3");
        write_executable(&python, &format!("echo 'Python {}'", python_version));

        if with_premake {
            write_executable(&root.join("vendor/premake/bin/premake5"), "exit 0");
        }

        write_executable(
            &root.join("Scripts/gen-projects.sh"),
            "echo \"$* $(pwd)\" >> generated.log",
        );

        fs::create_dir_all(root.join(".bitengine")).unwrap();
        fs::write(
            root.join(".bitengine/setup.yml"),
            format!(
                r#"
runtime:
  command: {}
build_tool:
  use_system_path: false
generator:
  script: Scripts/gen-projects.sh
  platform: {}
"#,
                python.display(),
                platform
            ),
        )
        .unwrap();

        temp
    }

    fn host() -> String {
        HostOs::current().to_string()
    }

    /// A platform that is never the current host.
    fn other_host() -> &'static str {
        if HostOs::current() == HostOs::Windows {
            "linux"
        } else {
            "windows"
        }
    }

    fn bootstrap(root: &Path) -> Command {
        let mut cmd = Command::new(cargo_bin("bitengine-setup"));
        cmd.current_dir(root);
        cmd.env("HOME", root);
        cmd.env_remove("BITENGINE_ROOT");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn old_runtime_fails_before_any_output() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project("2.7.18", true, &host());
        bootstrap(temp.path())
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("3.3 or newer is required"));
        assert!(!temp.path().join("generated.log").exists());
        Ok(())
    }

    #[test]
    fn missing_premake_reports_and_succeeds() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project("3.11.4", false, &host());
        bootstrap(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(MISSING_PREMAKE))
            .stdout(predicate::str::contains("Setup completed!").not())
            .stdout(predicate::str::contains("Running premake").not());
        assert!(!temp.path().join("generated.log").exists());
        Ok(())
    }

    #[test]
    fn supported_platform_runs_generator_once() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project("3.11.4", true, &host());
        bootstrap(temp.path())
            .arg("run")
            .assert()
            .success()
            .stdout(predicate::str::contains("Running premake..."))
            .stdout(predicate::str::contains("Setup completed!"));

        let log = fs::read_to_string(temp.path().join("generated.log"))?;
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("nopause "));
        Ok(())
    }

    #[test]
    fn quiet_run_hides_progress_but_not_completion() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project("3.11.4", true, &host());
        bootstrap(temp.path())
            .arg("--quiet")
            .assert()
            .success()
            .stdout(predicate::str::contains("Running premake").not())
            .stdout(predicate::str::contains("Setup completed!"));
        assert!(temp.path().join("generated.log").exists());
        Ok(())
    }

    #[test]
    fn quiet_run_still_reports_missing_premake() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project("3.11.4", false, &host());
        bootstrap(temp.path())
            .arg("-q")
            .assert()
            .success()
            .stdout(predicate::str::contains(MISSING_PREMAKE));
        Ok(())
    }

    #[test]
    fn unsupported_platform_still_reports_completion() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project("3.11.4", true, other_host());
        bootstrap(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Setup completed!"))
            .stdout(predicate::str::contains("Running premake").not());
        assert!(!temp.path().join("generated.log").exists());
        Ok(())
    }

    #[test]
    fn generator_runs_in_root_when_started_from_subdirectory(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project("3.11.4", true, &host());
        let scripts = temp.path().join("Scripts");

        bootstrap(&scripts).assert().success();

        let log = fs::read_to_string(temp.path().join("generated.log"))?;
        let logged_dir = log.trim().trim_start_matches("nopause ").to_string();
        assert_eq!(
            fs::canonicalize(logged_dir)?,
            fs::canonicalize(temp.path())?
        );
        assert!(!scripts.join("generated.log").exists());
        Ok(())
    }

    #[test]
    fn explicit_project_root_is_used_from_outside_the_tree(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project("3.11.4", true, &host());
        let outside = TempDir::new()?;

        bootstrap(outside.path())
            .arg("--project")
            .arg(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Setup completed!"));

        let log = fs::read_to_string(temp.path().join("generated.log"))?;
        let logged_dir = log.trim().trim_start_matches("nopause ").to_string();
        assert_eq!(
            fs::canonicalize(logged_dir)?,
            fs::canonicalize(temp.path())?
        );
        assert!(!outside.path().join("generated.log").exists());
        Ok(())
    }

    #[test]
    fn failing_runtime_shim_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project("3.11.4", true, &host());
        write_executable(
            &temp.path().join("tools/python3"),
            "echo 'python3: command not found. Available: 3.10.4' 1>&2\nexit 127",
        );

        bootstrap(temp.path())
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("exited with code Some(127)"));
        assert!(!temp.path().join("generated.log").exists());
        Ok(())
    }

    #[test]
    fn repeated_runs_print_the_same_narrative() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project("3.11.4", false, &host());
        let first = bootstrap(temp.path()).output()?;
        let second = bootstrap(temp.path()).output()?;

        assert!(first.status.success());
        assert_eq!(first.status.code(), second.status.code());
        assert_eq!(first.stdout, second.stdout);
        Ok(())
    }

    #[test]
    fn generator_failure_exit_code_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project("3.11.4", true, &host());
        write_executable(&temp.path().join("Scripts/gen-projects.sh"), "exit 7");

        bootstrap(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Setup completed!"));
        Ok(())
    }

    #[test]
    fn check_reports_json() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project("3.11.4", false, &host());
        let output = bootstrap(temp.path()).args(["check", "--json"]).output()?;

        assert_eq!(output.status.code(), Some(1));
        let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        let entries = report["requirements"].as_array().unwrap();
        assert_eq!(entries[0]["requirement"], "Python");
        assert_eq!(entries[0]["status"], "satisfied");
        assert_eq!(entries[0]["version"], "3.11.4");
        assert_eq!(entries[1]["requirement"], "Premake");
        assert_eq!(entries[1]["status"], "unsatisfied");
        Ok(())
    }

    #[test]
    fn check_does_not_abort_on_old_runtime() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project("3.2.0", true, &host());
        bootstrap(temp.path())
            .arg("check")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Premake"))
            .stderr(predicate::str::contains("3.3 or newer is required"));
        assert!(!temp.path().join("generated.log").exists());
        Ok(())
    }

    #[test]
    fn debug_logging_stays_off_stdout() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project("3.11.4", false, &host());
        let output = bootstrap(temp.path()).arg("--debug").output()?;

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout)?;
        assert_eq!(stdout.trim(), MISSING_PREMAKE);
        Ok(())
    }
}
