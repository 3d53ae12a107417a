//! Command Line Interface module
//!
//! This module contains the CLI argument parsing, command implementations,
//! and the Terminal User Interface (TUI) components.

pub mod args;
pub mod commands;
pub mod tui;

pub use args::*;

use anyhow::Result;

use crate::config::AppConfig;
use crate::utils::logging::init_cli_logging;

/// Main CLI application runner
pub async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(AppConfig::default_path);
    let mut config = AppConfig::load(&config_path)?;
    if let Some(server_url) = &cli.server_url {
        config.server_url = server_url.clone();
    }

    let tui_mode = cli.command.is_none() && !cli.cli;
    init_cli_logging(cli.verbose, cli.quiet, tui_mode)?;

    match &cli.command {
        Some(command) => {
            // Run specific command
            commands::execute_command(command.clone(), &cli, &config).await
        }
        None => {
            // Default behavior - run TUI or CLI based on flags
            if cli.cli {
                commands::list::execute_list_command(&config, false, false, None, None).await
            } else {
                tui::run_tui(config).await
            }
        }
    }
}
