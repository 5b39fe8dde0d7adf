//! Domain error types
//!
//! This module defines the error hierarchy for filtered-export.
//! Host-specific failures are wrapped so no adapter type leaks through the core.

use thiserror::Error;

/// Main filtered-export error type
///
/// The first three variants are the expected, user-facing conditions of an
/// export run. Everything else is unexpected and is reported with full
/// diagnostic detail.
#[derive(Debug, Error)]
pub enum FilteredExportError {
    /// No design context is available
    #[error("No active design")]
    NoActiveDesign,

    /// The user cancelled the destination-folder prompt
    #[error("No export path defined.")]
    NoExportPathChosen,

    /// Traversal and collection yielded zero eligible bodies
    #[error("No bodies found.")]
    NoBodiesFound,

    /// The host exporter failed for a body or component
    #[error("Export of '{target}' failed: {source}")]
    HostExportFailure {
        /// File name of the body or component being exported
        target: String,

        /// Underlying host error
        #[source]
        source: HostError,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The design description is malformed
    #[error("Design error: {0}")]
    Design(String),

    /// A selected occurrence could not be resolved
    #[error("Selection error: {0}")]
    Selection(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl FilteredExportError {
    /// Returns true for conditions that are reported to the user as a short
    /// message rather than a full diagnostic
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            FilteredExportError::NoActiveDesign
                | FilteredExportError::NoExportPathChosen
                | FilteredExportError::NoBodiesFound
        )
    }

    /// Wraps a host error for the given export target
    pub fn host_failure(target: impl Into<String>, source: HostError) -> Self {
        FilteredExportError::HostExportFailure {
            target: target.into(),
            source,
        }
    }
}

/// Host exporter errors
///
/// Errors raised by the collaborator that writes STL/STEP files.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host has no geometry to write for the object
    #[error("No geometry payload available for {0}")]
    PayloadMissing(String),

    /// The host failed to write the output file
    #[error("Failed to write {path}: {message}")]
    Io { path: String, message: String },

    /// The object refers to a component the host does not know
    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    /// The export request was refused, e.g. a file name leaving the destination folder
    #[error("Export rejected: {0}")]
    Rejected(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for FilteredExportError {
    fn from(err: std::io::Error) -> Self {
        FilteredExportError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for FilteredExportError {
    fn from(err: toml::de::Error) -> Self {
        FilteredExportError::Configuration(format!("TOML parse error: {err}"))
    }
}
