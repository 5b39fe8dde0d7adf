//! Export result and reporting
//!
//! This module defines the outcome of one export command and the plain-text
//! summary shown to the user.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of one export command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportResult {
    export_path: PathBuf,
    exported_names: Vec<String>,
    skipped_names: Vec<String>,
}

impl ExportResult {
    /// Create a new export result
    pub fn new(
        export_path: impl Into<PathBuf>,
        exported_names: Vec<String>,
        skipped_names: Vec<String>,
    ) -> Self {
        Self {
            export_path: export_path.into(),
            exported_names,
            skipped_names,
        }
    }

    /// Destination folder
    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    /// File names written, in export order
    pub fn exported_names(&self) -> &[String] {
        &self.exported_names
    }

    /// Components deliberately not exported
    pub fn skipped_names(&self) -> &[String] {
        &self.skipped_names
    }

    /// Render the user-facing summary
    ///
    /// # Examples
    ///
    /// ```
    /// use filtered_export::core::export::ExportResult;
    ///
    /// let result = ExportResult::new("/out", vec!["Assy-Leg-Foot".to_string()], vec![]);
    /// assert_eq!(result.render(), "Path:\n   /out\nProcessed:\n   Assy-Leg-Foot\n");
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Log the result
    pub fn log_summary(&self) {
        tracing::info!(
            export_path = %self.export_path.display(),
            exported = self.exported_names.len(),
            skipped = self.skipped_names.len(),
            "Export completed"
        );

        for name in &self.skipped_names {
            tracing::info!(name = %name, "Skipped component with bodies and child occurrences");
        }
    }
}

impl fmt::Display for ExportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Path:")?;
        writeln!(f, "   {}", self.export_path.display())?;

        writeln!(f, "Processed:")?;
        for name in &self.exported_names {
            writeln!(f, "   {name}")?;
        }

        if self.skipped_names.is_empty() {
            return Ok(());
        }

        writeln!(f, "Skipped:")?;
        for name in &self.skipped_names {
            writeln!(f, "   {name}")?;
        }

        Ok(())
    }
}
