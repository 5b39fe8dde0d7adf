// Filtered Export - STL/STEP export without duplicates
// Copyright (c) 2025 Filtered Export Contributors
// Licensed under the MIT License

use clap::Parser;
use filtered_export::cli::commands::common::require_config;
use filtered_export::cli::{Cli, Commands};
use filtered_export::config::{load_config_or_default, FilteredExportConfig};
use filtered_export::domain::Result;
use filtered_export::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // A broken configuration is reported by the command; logging falls back to defaults
    let config = load_config_or_default(cli.config_path());

    let (log_level, logging_config) = match &config {
        Ok(c) => (
            cli.log_level
                .clone()
                .unwrap_or_else(|| c.application.log_level.clone()),
            c.logging.clone(),
        ),
        Err(_) => (
            cli.log_level.clone().unwrap_or_else(|| "info".to_string()),
            Default::default(),
        ),
    };

    let logging_guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Filtered Export - STL/STEP export without duplicates"
    );

    let exit_code = match execute_command(&cli, config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Failed:\n{e:?}");
            5 // Fatal error exit code
        }
    };

    // process::exit skips destructors; flush file logs first
    drop(logging_guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli, config: Result<FilteredExportConfig>) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Stl(args) => require_config(config, |c| args.execute(c)),
        Commands::Step(args) => require_config(config, |c| args.execute(c)),
        Commands::ValidateConfig(args) => args.execute(cli.config_path(), config),
        Commands::Init(args) => args.execute(),
    }
}
