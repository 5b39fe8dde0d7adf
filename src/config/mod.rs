//! Configuration management for Filtered Export.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Filtered Export uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `FILTERED_EXPORT_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use filtered_export::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("filtered-export.toml")?;
//!
//! println!("Refinement: {}", config.stl.refinement);
//! println!("STEP mode: {}", config.step.mode);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry run
//! - [`ExportConfig`] - Design snapshot and destination folder
//! - [`StlConfig`] - STL format, refinement and linked-component filtering
//! - [`StepConfig`] - STEP mode and naming
//! - [`NamingOptions`](crate::core::naming::NamingOptions) - STL file naming
//! - [`LoggingConfig`] - File logging
//!
//! # Example Configuration
//!
//! ```toml
//! [export]
//! design = "${DESIGNS}/table.json"
//! output_dir = "out"
//!
//! [stl]
//! format = "binary"
//! refinement = "high"
//!
//! [naming]
//! add_root_name = true
//! component_name_mode = "last_segment"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default, parse_config, DEFAULT_CONFIG_PATH};
pub use schema::{
    ApplicationConfig, ExportConfig, FilteredExportConfig, LogRotation, LoggingConfig,
    StepConfig, StlConfig,
};
