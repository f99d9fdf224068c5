//! bitengine-setup CLI entry point.

use std::process::ExitCode;

use bitengine_setup::cli::{Cli, CommandDispatcher};
use bitengine_setup::config::resolve_project_root;
use bitengine_setup::shell::is_ci;
use bitengine_setup::ui::{create_ui, OutputMode};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries the setup narrative.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("bitengine_setup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bitengine_setup=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("bitengine-setup starting with args: {:?}", cli);

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);
    let mut ui = create_ui(!is_ci(), output_mode);

    let project_root = match std::env::current_dir()
        .map_err(Into::into)
        .and_then(|cwd| resolve_project_root(cli.project.as_deref(), &cwd))
    {
        Ok(root) => root,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };
    tracing::debug!("Project root: {}", project_root.display());

    let dispatcher = CommandDispatcher::new(project_root).with_config_override(cli.config.clone());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
