//! Pieces shared by the export commands
//!
//! Both export commands load the design, resolve the selection, pick the
//! folder prompt and exporter, run the coordinator and report the outcome.

use crate::adapters::filesystem::{DryRunExporter, FileSystemExporter};
use crate::adapters::host::{FolderPrompt, ModelExporter};
use crate::adapters::prompt::{FixedFolder, StdinFolderPrompt};
use crate::adapters::snapshot::SnapshotDesign;
use crate::config::FilteredExportConfig;
use crate::core::export::{ExportCoordinator, ExportResult, Selection};
use crate::domain::{FilteredExportError, Result};
use crate::log_error_with_context;
use clap::Args;
use std::path::PathBuf;

/// Arguments shared by the export commands
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Design snapshot to export from (overrides export.design)
    #[arg(short, long, value_name = "FILE")]
    pub design: Option<PathBuf>,

    /// Destination folder (overrides export.output_dir); asked for when unset
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Full path of an occurrence to export; repeat for several, omit for everything
    #[arg(short, long, value_name = "PATH")]
    pub select: Vec<String>,

    /// Dry run mode - derive names without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run an export and report its outcome
///
/// Returns the process exit code: 0 on success, 1 for an expected abort
/// (no design, no folder, no bodies), 2 for configuration or selection
/// errors, 5 for anything else.
pub fn execute_export<F>(
    source: &SourceArgs,
    config: &FilteredExportConfig,
    run: F,
) -> anyhow::Result<i32>
where
    F: FnOnce(&mut ExportCoordinator<'_>, &Selection) -> Result<ExportResult>,
{
    match export(source, config, run) {
        Ok(result) => {
            result.log_summary();
            if source.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", result.render());
            }
            Ok(0)
        }
        Err(error) => Ok(report_failure(error)),
    }
}

/// Unwrap a loaded configuration or report why it could not be loaded
pub fn require_config<F>(config: Result<FilteredExportConfig>, execute: F) -> anyhow::Result<i32>
where
    F: FnOnce(FilteredExportConfig) -> anyhow::Result<i32>,
{
    match config {
        Ok(config) => execute(config),
        Err(error) => Ok(report_failure(error)),
    }
}

/// Print an error for the user and map it to an exit code
pub fn report_failure(error: FilteredExportError) -> i32 {
    if error.is_expected() {
        tracing::warn!(error = %error, "Export aborted");
        eprintln!("{error}");
        return 1;
    }

    match error {
        FilteredExportError::Configuration(_) | FilteredExportError::Selection(_) => {
            tracing::error!(error = %error, "Invalid invocation");
            eprintln!("{error}");
            2
        }
        other => {
            log_error_with_context!(&other, "Export command");
            eprintln!("Failed:\n{:?}", anyhow::Error::new(other));
            5
        }
    }
}

fn export<F>(source: &SourceArgs, config: &FilteredExportConfig, run: F) -> Result<ExportResult>
where
    F: FnOnce(&mut ExportCoordinator<'_>, &Selection) -> Result<ExportResult>,
{
    let design_path = source
        .design
        .as_ref()
        .or(config.export.design.as_ref())
        .ok_or(FilteredExportError::NoActiveDesign)?;

    let design = SnapshotDesign::load(design_path)?;
    let selection = design.resolve_selection(&source.select)?;

    let dry_run = source.dry_run || config.application.dry_run;

    let mut fixed_prompt;
    let mut stdin_prompt;
    let prompt: &mut dyn FolderPrompt =
        match source.output.clone().or_else(|| config.export.output_dir.clone()) {
            Some(folder) => {
                // The folder dialog only ever returns existing folders
                if !dry_run {
                    std::fs::create_dir_all(&folder)?;
                }
                fixed_prompt = FixedFolder::new(folder);
                &mut fixed_prompt
            }
            None => {
                stdin_prompt = StdinFolderPrompt::new();
                &mut stdin_prompt
            }
        };

    let mut dry_run_exporter;
    let mut file_exporter;
    let exporter: &mut dyn ModelExporter = if dry_run {
        tracing::info!("Dry run: no files will be written");
        dry_run_exporter = DryRunExporter::new();
        &mut dry_run_exporter
    } else {
        file_exporter = FileSystemExporter::new(&design);
        &mut file_exporter
    };

    let mut coordinator = ExportCoordinator::new(&design, exporter, prompt);
    run(&mut coordinator, &selection)
}
