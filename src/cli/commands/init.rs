//! Init command implementation
//!
//! This module implements the `init` command for generating a commented
//! default configuration file.

use crate::config::DEFAULT_CONFIG_PATH;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output.display(), "Initializing configuration file");

        println!("📝 Initializing Filtered Export configuration");
        println!();

        if self.output.exists() && !self.force {
            println!(
                "❌ Configuration file already exists: {}",
                self.output.display()
            );
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output.display());
                println!();
                println!("Next steps:");
                println!("  1. Set export.design to your design snapshot");
                println!("  2. Adjust naming and STL/STEP settings");
                println!("  3. Validate configuration: filtered-export validate-config");
                println!("  4. Run an export: filtered-export stl");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the default configuration with comments
    fn generate_config() -> String {
        r#"# Filtered Export Configuration File
# STL/STEP export without duplicates
#
# Every value below is the default; delete what you do not need to change.
# Values may reference environment variables with ${VAR_NAME}, and any
# setting can be overridden with FILTERED_EXPORT_<SECTION>_<KEY>.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode (derive names, write nothing)
dry_run = false

# ============================================================================
# Design and Destination
# ============================================================================
[export]
# Design snapshot (JSON) to export from
# design = "designs/table.json"

# Destination folder; asked for on the terminal when unset
# output_dir = "exports"

# ============================================================================
# STL Export
# ============================================================================
[stl]
# File encoding: binary | text
format = "binary"

# Mesh refinement: low | medium | high
refinement = "high"

# Skip linked (referenced) occurrences and everything below them
filter_linked_components = false

# ============================================================================
# STEP Export
# ============================================================================
[step]
# Which components are written:
# - top_level: the selected components only
# - leaves: components with bodies and no child occurrences
# - mixed_leaves: every component below the selection
mode = "top_level"

# STEP file names keep the component name as is
[step.naming]
add_root_name = false
add_component_name = false
component_name_mode = "last_segment"
strip_version_tag = false
normalize_spacing = false

# ============================================================================
# STL File Naming
# ============================================================================
[naming]
# Prefix the root component name
add_root_name = true

# Include the component name
add_component_name = true

# Component name: last_segment (parent name) | full_path (occurrence path)
component_name_mode = "last_segment"

# Remove trailing " v<digits>" version tags
strip_version_tag = true

# Trim and replace spaces with underscores
normalize_spacing = true

# Prefix the refinement label (Low, Medium, High)
add_refinement_name = false

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable JSON file logging
local_enabled = false

# Log directory
local_path = "logs"

# Log rotation: daily | hourly | never
local_rotation = "daily"
"#
        .to_string()
    }
}
