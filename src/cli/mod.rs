//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Filtered Export using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Filtered Export - STL/STEP export without duplicates
#[derive(Parser, Debug)]
#[command(name = "filtered-export")]
#[command(version, about, long_about = None)]
#[command(author = "Filtered Export Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to filtered-export.toml when present)
    #[arg(short, long, env = "FILTERED_EXPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "FILTERED_EXPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Explicit configuration path, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export visible bodies as STL files, one per distinct component body
    Stl(commands::stl::StlArgs),

    /// Export components as STEP files
    Step(commands::step::StepArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
