//! Exporters writing into the chosen destination folder

use crate::adapters::host::{DesignModel, ModelExporter, StlExportSettings};
use crate::adapters::snapshot::SnapshotDesign;
use crate::domain::{Body, Component, HostError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Append a file extension without touching anything already in the name
fn with_extension(destination: &Path, extension: &str) -> PathBuf {
    let mut path = OsString::from(destination.as_os_str());
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
}

/// Copies snapshot payload files to their export destinations
///
/// Plays the part of the CAD host's STL/STEP encoders: the payload of a
/// body (or the STEP payload of a component) is the already-encoded file.
/// The destination folder must exist; no directories are created.
pub struct FileSystemExporter<'a> {
    design: &'a SnapshotDesign,
    written: Vec<PathBuf>,
}

impl<'a> FileSystemExporter<'a> {
    /// Create an exporter reading payloads from `design`
    pub fn new(design: &'a SnapshotDesign) -> Self {
        Self {
            design,
            written: Vec::new(),
        }
    }

    /// Files written so far, in order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn copy(&mut self, payload: &Path, target: PathBuf) -> Result<(), HostError> {
        let io_error = |e: std::io::Error| HostError::Io {
            path: target.display().to_string(),
            message: e.to_string(),
        };

        let bytes = std::fs::copy(payload, &target).map_err(io_error)?;

        tracing::debug!(
            payload = %payload.display(),
            target = %target.display(),
            bytes,
            "Wrote export file"
        );

        self.written.push(target);
        Ok(())
    }
}

impl ModelExporter for FileSystemExporter<'_> {
    fn export_body(
        &mut self,
        body: &Body,
        destination: &Path,
        settings: &StlExportSettings,
    ) -> Result<(), HostError> {
        let payload = self
            .design
            .body_payload(&body.id)
            .ok_or_else(|| HostError::PayloadMissing(format!("body '{}'", body.name)))?
            .to_path_buf();

        tracing::trace!(
            body = %body.id,
            format = %settings.format,
            refinement = %settings.refinement,
            "Exporting STL"
        );

        self.copy(&payload, with_extension(destination, "stl"))
    }

    fn export_component(
        &mut self,
        component: &Component,
        destination: &Path,
    ) -> Result<(), HostError> {
        if self.design.component(&component.id).is_none() {
            return Err(HostError::UnknownComponent(component.id.to_string()));
        }

        let payload = self
            .design
            .step_payload(&component.id)
            .ok_or_else(|| HostError::PayloadMissing(format!("component '{}'", component.name)))?
            .to_path_buf();

        self.copy(&payload, with_extension(destination, "step"))
    }
}

/// Records export destinations without writing anything
#[derive(Debug, Default)]
pub struct DryRunExporter {
    planned: Vec<PathBuf>,
}

impl DryRunExporter {
    /// Create a new dry-run exporter
    pub fn new() -> Self {
        Self::default()
    }

    /// Files that would have been written, in order
    pub fn planned(&self) -> &[PathBuf] {
        &self.planned
    }
}

impl ModelExporter for DryRunExporter {
    fn export_body(
        &mut self,
        body: &Body,
        destination: &Path,
        _settings: &StlExportSettings,
    ) -> Result<(), HostError> {
        let target = with_extension(destination, "stl");
        tracing::info!(body = %body.name, target = %target.display(), "Dry run: would export body");
        self.planned.push(target);
        Ok(())
    }

    fn export_component(
        &mut self,
        component: &Component,
        destination: &Path,
    ) -> Result<(), HostError> {
        let target = with_extension(destination, "step");
        tracing::info!(
            component = %component.name,
            target = %target.display(),
            "Dry run: would export component"
        );
        self.planned.push(target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::ComponentId;
    use tempfile::TempDir;

    fn design(dir: &Path) -> SnapshotDesign {
        std::fs::write(dir.join("foot.stl"), b"solid foot").unwrap();
        std::fs::write(dir.join("top.step"), b"ISO-10303-21;").unwrap();

        let json = r#"{"name": "Table", "root": "assy", "components": [
            {"id": "assy", "name": "Assy",
             "occurrences": [{"component": "leg"}, {"component": "top"}]},
            {"id": "leg", "name": "Leg", "bodies": [{"name": "Foot", "payload": "foot.stl"}]},
            {"id": "top", "name": "Top", "bodies": [{"name": "Surface"}],
             "step_payload": "top.step"}
        ]}"#;
        SnapshotDesign::from_json(json, dir).unwrap()
    }

    #[test]
    fn test_with_extension_keeps_name() {
        assert_eq!(
            with_extension(Path::new("/out/Part__v2"), "stl"),
            PathBuf::from("/out/Part__v2.stl")
        );
    }

    #[test]
    fn test_export_body_copies_payload() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let design = design(source.path());
        let leg = design.component(&ComponentId::new("leg").unwrap()).unwrap().clone();

        let mut exporter = FileSystemExporter::new(&design);
        exporter
            .export_body(
                &leg.bodies[0],
                &output.path().join("Assy-Leg-Foot"),
                &StlExportSettings::default(),
            )
            .unwrap();

        let written = output.path().join("Assy-Leg-Foot.stl");
        assert_eq!(std::fs::read(&written).unwrap(), b"solid foot");
        assert_eq!(exporter.written(), [written]);
    }

    #[test]
    fn test_export_body_without_payload() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let design = design(source.path());
        let top = design.component(&ComponentId::new("top").unwrap()).unwrap().clone();

        let mut exporter = FileSystemExporter::new(&design);
        let error = exporter
            .export_body(
                &top.bodies[0],
                &output.path().join("Top-Surface"),
                &StlExportSettings::default(),
            )
            .unwrap_err();

        assert!(matches!(error, HostError::PayloadMissing(_)));
        assert!(exporter.written().is_empty());
    }

    #[test]
    fn test_export_component_copies_step_payload() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let design = design(source.path());
        let top = design.component(&ComponentId::new("top").unwrap()).unwrap().clone();

        let mut exporter = FileSystemExporter::new(&design);
        exporter
            .export_component(&top, &output.path().join("Top"))
            .unwrap();

        assert!(output.path().join("Top.step").is_file());
    }

    #[test]
    fn test_export_into_missing_folder_fails() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let design = design(source.path());
        let leg = design.component(&ComponentId::new("leg").unwrap()).unwrap().clone();

        let mut exporter = FileSystemExporter::new(&design);
        let error = exporter
            .export_body(
                &leg.bodies[0],
                &output.path().join("sub").join("Foot"),
                &StlExportSettings::default(),
            )
            .unwrap_err();

        assert!(matches!(error, HostError::Io { .. }));
        assert!(!output.path().join("sub").exists());
        assert!(exporter.written().is_empty());
    }

    #[test]
    fn test_export_unknown_component() {
        let source = TempDir::new().unwrap();
        let design = design(source.path());
        let stranger = Component::new(ComponentId::new("stranger").unwrap(), "Stranger");

        let mut exporter = FileSystemExporter::new(&design);
        let error = exporter
            .export_component(&stranger, Path::new("/out/Stranger"))
            .unwrap_err();

        assert!(matches!(error, HostError::UnknownComponent(_)));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let output = TempDir::new().unwrap();
        let part = Component::new(ComponentId::new("p").unwrap(), "Part").with_body("Body1");

        let mut exporter = DryRunExporter::new();
        exporter
            .export_body(
                &part.bodies[0],
                &output.path().join("Part-Body1"),
                &StlExportSettings::default(),
            )
            .unwrap();
        exporter
            .export_component(&part, &output.path().join("Part"))
            .unwrap();

        assert_eq!(
            exporter.planned(),
            [output.path().join("Part-Body1.stl"), output.path().join("Part.step")]
        );
        assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
    }
}
