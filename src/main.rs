//! Liftlog CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use liftlog::cli::{Cli, CommandDispatcher, DataContext};
use liftlog::config::{config_path, load_config, resolve_data_dir};
use liftlog::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("liftlog=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("liftlog=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Liftlog starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Falls back to plain output when stdout is not a terminal
    let mut ui = create_ui(true, output_mode);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref());
    let config_file = cli.config.clone().unwrap_or_else(|| config_path(&data_dir));
    let mut config = match load_config(&config_file) {
        Ok(config) => config,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };
    config.strict |= cli.strict;
    tracing::debug!(data_dir = %data_dir.display(), ?config, "resolved configuration");

    let dispatcher = CommandDispatcher::new(DataContext::new(data_dir, config.store_options()));

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
