//! STEP export command implementation

use super::common::{execute_export, SourceArgs};
use crate::config::FilteredExportConfig;
use crate::core::export::StepExportMode;
use clap::Args;

/// Arguments for the step command
#[derive(Args, Debug)]
pub struct StepArgs {
    /// Design, destination and selection
    #[command(flatten)]
    pub source: SourceArgs,

    /// Override which components are exported (top-level, leaves, mixed-leaves)
    #[arg(long)]
    pub mode: Option<StepExportMode>,
}

impl StepArgs {
    /// Execute the step command
    pub fn execute(&self, mut config: FilteredExportConfig) -> anyhow::Result<i32> {
        tracing::info!("Starting STEP export command");

        if let Some(mode) = self.mode {
            tracing::info!(mode = %mode, "Overriding STEP mode from CLI");
            config.step.mode = mode;
        }

        let mode = config.step.mode;
        let options = config.step_options();

        execute_export(&self.source, &config, |coordinator, selection| {
            coordinator.run_step_export(selection, mode, &options)
        })
    }
}
