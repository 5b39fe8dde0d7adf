//! STL export command implementation
//!
//! This module implements the `stl` command: every distinct component of
//! the selection contributes its visible bodies, one STL file each.

use super::common::{execute_export, SourceArgs};
use crate::adapters::host::{MeshRefinement, StlFormat};
use crate::config::FilteredExportConfig;
use clap::Args;

/// Arguments for the stl command
#[derive(Args, Debug)]
pub struct StlArgs {
    /// Design, destination and selection
    #[command(flatten)]
    pub source: SourceArgs,

    /// Override STL format (binary or text)
    #[arg(long)]
    pub format: Option<StlFormat>,

    /// Override mesh refinement (low, medium, high)
    #[arg(long)]
    pub refinement: Option<MeshRefinement>,

    /// Skip linked occurrences and their subtrees
    #[arg(long)]
    pub filter_linked: bool,
}

impl StlArgs {
    /// Execute the stl command
    pub fn execute(&self, mut config: FilteredExportConfig) -> anyhow::Result<i32> {
        tracing::info!("Starting STL export command");

        self.apply_overrides(&mut config);
        let options = config.stl_options();

        execute_export(&self.source, &config, |coordinator, selection| {
            coordinator.run_stl_export(selection, &options)
        })
    }

    fn apply_overrides(&self, config: &mut FilteredExportConfig) {
        if let Some(format) = self.format {
            tracing::info!(format = %format, "Overriding STL format from CLI");
            config.stl.format = format;
        }

        if let Some(refinement) = self.refinement {
            tracing::info!(refinement = %refinement, "Overriding refinement from CLI");
            config.stl.refinement = refinement;
        }

        if self.filter_linked {
            tracing::info!("Filtering linked components from CLI");
            config.stl.filter_linked_components = true;
        }
    }
}
