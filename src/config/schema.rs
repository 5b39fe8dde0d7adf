//! Configuration schema types
//!
//! This module defines the configuration structure for Filtered Export.
//! Every section is optional; defaults mirror the export dialog defaults.

use crate::adapters::host::{MeshRefinement, StlExportSettings, StlFormat};
use crate::core::export::{StepExportMode, StepExportOptions, StlExportOptions};
use crate::core::naming::NamingOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Filtered Export configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilteredExportConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Design and destination
    #[serde(default)]
    pub export: ExportConfig,

    /// STL export settings
    #[serde(default)]
    pub stl: StlConfig,

    /// STEP export settings
    #[serde(default)]
    pub step: StepConfig,

    /// File naming used by STL exports
    #[serde(default)]
    pub naming: NamingOptions,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FilteredExportConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Options for an STL export run
    pub fn stl_options(&self) -> StlExportOptions {
        StlExportOptions {
            settings: StlExportSettings {
                format: self.stl.format,
                refinement: self.stl.refinement,
            },
            filter_linked_components: self.stl.filter_linked_components,
            naming: self.naming.clone(),
        }
    }

    /// Options for a STEP export run
    pub fn step_options(&self) -> StepExportOptions {
        StepExportOptions {
            naming: self.step.naming.clone(),
        }
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (don't write any file)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Design and destination configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    /// Design snapshot to export from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design: Option<PathBuf>,

    /// Destination folder; asked for interactively when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(design) = &self.design {
            if design.as_os_str().is_empty() {
                return Err("export.design cannot be empty".to_string());
            }
        }

        if let Some(output_dir) = &self.output_dir {
            if output_dir.as_os_str().is_empty() {
                return Err("export.output_dir cannot be empty".to_string());
            }
            if output_dir.is_file() {
                return Err(format!(
                    "export.output_dir '{}' is a file, not a folder",
                    output_dir.display()
                ));
            }
        }

        Ok(())
    }
}

/// STL export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StlConfig {
    /// File encoding (binary, text)
    #[serde(default)]
    pub format: StlFormat,

    /// Mesh refinement (low, medium, high)
    #[serde(default)]
    pub refinement: MeshRefinement,

    /// Skip linked occurrences and their subtrees
    #[serde(default)]
    pub filter_linked_components: bool,
}

/// STEP export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepConfig {
    /// Which components are exported (top_level, leaves, mixed_leaves)
    #[serde(default)]
    pub mode: StepExportMode,

    /// File naming used by STEP exports
    #[serde(default = "NamingOptions::plain")]
    pub naming: NamingOptions,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            mode: StepExportMode::default(),
            naming: NamingOptions::plain(),
        }
    }
}

/// Log file rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// One file per day
    #[default]
    Daily,
    /// One file per hour
    Hourly,
    /// A single file
    Never,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default)]
    pub local_rotation: LogRotation,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: LogRotation::default(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}
