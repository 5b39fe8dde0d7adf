//! Host collaborator traits
//!
//! The CAD host owns the design and the file encoders. The core reaches it
//! only through these traits, so it never touches ambient application state.

use crate::domain::ids::ComponentId;
use crate::domain::{Body, Component, HostError, Occurrence};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Read-only access to an open design
pub trait DesignModel {
    /// Display name of the design document
    fn design_name(&self) -> &str;

    /// The root component of the design
    fn root_component(&self) -> &Component;

    /// Occurrences placed directly in the root component
    fn root_occurrences(&self) -> Vec<Occurrence>;

    /// Child occurrences of an occurrence, in host order
    fn child_occurrences(&self, occurrence: &Occurrence) -> Vec<Occurrence>;

    /// Look up a component by identity
    fn component(&self, id: &ComponentId) -> Option<&Component>;
}

/// Writes STL/STEP files
///
/// `destination` carries no extension; the exporter appends the one
/// matching the format.
pub trait ModelExporter {
    /// Export a single body as STL
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] on I/O or geometry failure.
    fn export_body(
        &mut self,
        body: &Body,
        destination: &Path,
        settings: &StlExportSettings,
    ) -> Result<(), HostError>;

    /// Export a whole component as STEP
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] on I/O or geometry failure.
    fn export_component(&mut self, component: &Component, destination: &Path)
        -> Result<(), HostError>;
}

/// Destination folder dialog
pub trait FolderPrompt {
    /// Ask for the export folder, `None` when the user cancels
    fn choose_folder(&mut self) -> Option<PathBuf>;
}

/// STL file encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StlFormat {
    /// Binary STL
    #[default]
    Binary,
    /// ASCII STL
    Text,
}

impl fmt::Display for StlFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StlFormat::Binary => write!(f, "Binary"),
            StlFormat::Text => write!(f, "Text"),
        }
    }
}

impl FromStr for StlFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binary" => Ok(StlFormat::Binary),
            "text" | "ascii" => Ok(StlFormat::Text),
            _ => Err(format!(
                "Invalid STL format '{s}'. Must be one of: binary, text"
            )),
        }
    }
}

/// Mesh refinement (tessellation fidelity)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeshRefinement {
    /// Coarse mesh
    Low,
    /// Medium mesh
    Medium,
    /// Fine mesh
    #[default]
    High,
}

impl MeshRefinement {
    /// Label used in file names
    pub fn label(&self) -> &'static str {
        match self {
            MeshRefinement::Low => "Low",
            MeshRefinement::Medium => "Medium",
            MeshRefinement::High => "High",
        }
    }
}

impl fmt::Display for MeshRefinement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MeshRefinement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(MeshRefinement::Low),
            "medium" => Ok(MeshRefinement::Medium),
            "high" => Ok(MeshRefinement::High),
            _ => Err(format!(
                "Invalid refinement '{s}'. Must be one of: low, medium, high"
            )),
        }
    }
}

/// Settings forwarded to the host for every STL body export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StlExportSettings {
    /// File encoding
    #[serde(default)]
    pub format: StlFormat,

    /// Mesh refinement
    #[serde(default)]
    pub refinement: MeshRefinement,
}
