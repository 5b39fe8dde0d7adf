//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Filtered Export configuration file.

use crate::config::{FilteredExportConfig, DEFAULT_CONFIG_PATH};
use crate::domain::Result;
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// `config` is the outcome of loading `config_path` (or the default file).
    pub fn execute(
        &self,
        config_path: Option<&Path>,
        config: Result<FilteredExportConfig>,
    ) -> anyhow::Result<i32> {
        let shown_path = config_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        tracing::info!(config_path = %shown_path, "Validating configuration");

        println!("🔍 Validating configuration file: {shown_path}");
        println!();

        let config = match config {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(2); // Configuration error exit code
            }
        };

        println!();
        println!("{}", Self::summary(&config));
        Ok(0)
    }

    fn summary(config: &FilteredExportConfig) -> String {
        let path_or_unset = |path: Option<&Path>| {
            path.map(|p| p.display().to_string())
                .unwrap_or_else(|| "(not set)".to_string())
        };

        let mut lines = vec![
            "Configuration Summary:".to_string(),
            format!("  Log Level: {}", config.application.log_level),
            format!("  Dry Run: {}", config.application.dry_run),
            format!("  Design: {}", path_or_unset(config.export.design.as_deref())),
            format!(
                "  Output Folder: {}",
                path_or_unset(config.export.output_dir.as_deref())
            ),
            format!("  STL Format: {}", config.stl.format),
            format!("  STL Refinement: {}", config.stl.refinement),
            format!(
                "  Filter Linked Components: {}",
                config.stl.filter_linked_components
            ),
            format!("  STEP Mode: {}", config.step.mode),
            format!("  Add Root Name: {}", config.naming.add_root_name),
            format!("  Add Component Name: {}", config.naming.add_component_name),
        ];

        if config.logging.local_enabled {
            lines.push(format!("  Log Files: {}", config.logging.local_path));
        }

        lines.join("\n")
    }
}
