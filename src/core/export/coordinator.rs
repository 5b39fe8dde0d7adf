//! Export coordinator - main orchestrator for the export process
//!
//! This module ties the traversal, naming and host export calls together
//! for one user-triggered export command. Every run owns a fresh
//! [`NameRegistry`]; nothing is carried over between runs.

use crate::adapters::host::{DesignModel, FolderPrompt, ModelExporter};
use crate::core::export::options::{Selection, StepExportMode, StepExportOptions, StlExportOptions};
use crate::core::export::summary::ExportResult;
use crate::core::naming::{derive_component_file_name, derive_file_name, NameRegistry};
use crate::core::traverse::{collect_bodies, flatten_occurrences, ComponentRecord, TraversalOptions};
use crate::domain::{FilteredExportError, HostError, Occurrence, Result};
use crate::{log_error_with_context, log_export_complete, log_export_start};
use std::path::{Component as PathComponent, Path, PathBuf};
use std::time::Instant;
use uuid::Uuid;

/// Export coordinator
///
/// Borrows the host collaborators for the duration of the runs it executes.
pub struct ExportCoordinator<'a> {
    design: &'a dyn DesignModel,
    exporter: &'a mut dyn ModelExporter,
    prompt: &'a mut dyn FolderPrompt,
}

impl<'a> ExportCoordinator<'a> {
    /// Create a new export coordinator
    pub fn new(
        design: &'a dyn DesignModel,
        exporter: &'a mut dyn ModelExporter,
        prompt: &'a mut dyn FolderPrompt,
    ) -> Self {
        Self {
            design,
            exporter,
            prompt,
        }
    }

    /// Export the visible bodies of the selection as STL files
    ///
    /// Bodies are collected before the destination folder is asked for, so
    /// an empty selection fails without prompting.
    ///
    /// # Errors
    ///
    /// - [`FilteredExportError::NoBodiesFound`] when the selection has no visible body
    /// - [`FilteredExportError::NoExportPathChosen`] when the folder prompt is cancelled
    /// - [`FilteredExportError::HostExportFailure`] when the host rejects a body;
    ///   files written before the failure stay on disk
    pub fn run_stl_export(
        &mut self,
        selection: &Selection,
        options: &StlExportOptions,
    ) -> Result<ExportResult> {
        let span = tracing::info_span!("stl_export", run_id = %Uuid::new_v4());
        let _enter = span.enter();
        let start_time = Instant::now();

        log_export_start!("stl", selection.describe());

        let design = self.design;
        let root = design.root_component();
        let traversal =
            TraversalOptions::recursive().with_filter_linked_components(options.filter_linked_components);

        let mut records = flatten_occurrences(
            &self.selected_roots(selection),
            |occurrence| design.child_occurrences(occurrence),
            traversal,
        );

        if *selection == Selection::Everything
            && !records.iter().any(|record| record.component == root.id)
        {
            records.push(ComponentRecord::new(root.id.clone(), root.name.clone()));
        }

        let bodies = collect_bodies(&records, |id| design.component(id))?;
        let folder = self.choose_folder()?;

        let naming = options
            .naming
            .clone()
            .with_refinement_label(options.settings.refinement.label());
        let mut registry = NameRegistry::new();
        let mut exported_names = Vec::with_capacity(bodies.len());

        for collected in &bodies {
            let parent = design.component(&collected.body.parent).ok_or_else(|| {
                FilteredExportError::Design(format!(
                    "Body '{}' belongs to unknown component '{}'",
                    collected.body.name, collected.body.parent
                ))
            })?;

            let name = derive_file_name(
                &collected.body,
                parent,
                &collected.originating_path,
                root,
                &naming,
                &mut registry,
            );
            let destination = match destination_in(&folder, &name) {
                Ok(destination) => destination,
                Err(source) => return Err(abort_batch(name, source, &exported_names)),
            };

            tracing::debug!(
                body = %collected.body.id,
                destination = %destination.display(),
                "Exporting body"
            );

            if let Err(source) =
                self.exporter
                    .export_body(&collected.body, &destination, &options.settings)
            {
                return Err(abort_batch(name, source, &exported_names));
            }

            exported_names.push(name);
        }

        log_export_complete!(exported_names.len(), start_time.elapsed());

        Ok(ExportResult::new(folder, exported_names, Vec::new()))
    }

    /// Export the components of the selection as STEP files
    ///
    /// Linked occurrences are never filtered for STEP exports.
    ///
    /// # Errors
    ///
    /// - [`FilteredExportError::NoExportPathChosen`] when the folder prompt is cancelled
    /// - [`FilteredExportError::HostExportFailure`] when the host rejects a component
    pub fn run_step_export(
        &mut self,
        selection: &Selection,
        mode: StepExportMode,
        options: &StepExportOptions,
    ) -> Result<ExportResult> {
        let span = tracing::info_span!("step_export", run_id = %Uuid::new_v4(), mode = %mode);
        let _enter = span.enter();
        let start_time = Instant::now();

        log_export_start!("step", selection.describe());

        let design = self.design;
        let root = design.root_component();
        let traversal = match mode {
            StepExportMode::TopLevel => TraversalOptions::top_level(),
            StepExportMode::Leaves | StepExportMode::MixedLeaves => TraversalOptions::recursive(),
        };

        let records = flatten_occurrences(
            &self.selected_roots(selection),
            |occurrence| design.child_occurrences(occurrence),
            traversal,
        );

        let folder = self.choose_folder()?;

        let mut registry = NameRegistry::new();
        let mut exported_names = Vec::new();
        let mut skipped_names = Vec::new();

        for record in &records {
            let component = design.component(&record.component).ok_or_else(|| {
                FilteredExportError::Design(format!(
                    "Component '{}' reached via '{}' is not part of the design",
                    record.component, record.originating_path
                ))
            })?;

            if mode == StepExportMode::Leaves && !component.is_leaf() {
                if !component.bodies.is_empty() {
                    tracing::info!(
                        component = %component.name,
                        "Skipping component with bodies and child occurrences"
                    );
                    skipped_names.push(component.name.clone());
                }
                continue;
            }

            let name = derive_component_file_name(
                component,
                &record.originating_path,
                root,
                &options.naming,
                &mut registry,
            );
            let destination = match destination_in(&folder, &name) {
                Ok(destination) => destination,
                Err(source) => return Err(abort_batch(name, source, &exported_names)),
            };

            tracing::debug!(
                component = %component.id,
                destination = %destination.display(),
                "Exporting component"
            );

            if let Err(source) = self.exporter.export_component(component, &destination) {
                return Err(abort_batch(name, source, &exported_names));
            }

            exported_names.push(name);
        }

        log_export_complete!(exported_names.len(), start_time.elapsed());

        Ok(ExportResult::new(folder, exported_names, skipped_names))
    }

    /// Occurrences the traversal starts from; the root component stands for its own occurrences
    fn selected_roots(&self, selection: &Selection) -> Vec<Occurrence> {
        match selection {
            Selection::Everything | Selection::RootComponent => self.design.root_occurrences(),
            Selection::Occurrences(occurrences) => occurrences.clone(),
        }
    }

    fn choose_folder(&mut self) -> Result<PathBuf> {
        match self.prompt.choose_folder() {
            Some(folder) => {
                tracing::info!(folder = %folder.display(), "Export folder chosen");
                Ok(folder)
            }
            None => {
                tracing::info!("Export folder prompt cancelled");
                Err(FilteredExportError::NoExportPathChosen)
            }
        }
    }
}

/// Place `name` directly inside `folder`
///
/// Names are CAD names and may contain path separators or be absolute;
/// anything but a single plain file name is refused so that no file lands
/// outside the chosen folder.
fn destination_in(folder: &Path, name: &str) -> std::result::Result<PathBuf, HostError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(PathComponent::Normal(part)), None) if part == name => Ok(folder.join(name)),
        _ => Err(HostError::Rejected(format!(
            "'{name}' is not a plain file name inside {}",
            folder.display()
        ))),
    }
}

/// Build the batch-aborting error, reporting what already reached the disk
fn abort_batch(
    target: String,
    source: HostError,
    exported_names: &[String],
) -> FilteredExportError {
    let error = FilteredExportError::host_failure(target, source);
    log_error_with_context!(&error, "Host export");
    tracing::warn!(
        already_exported = ?exported_names,
        "Export aborted; files already written are kept"
    );
    error
}
