//! Core business logic for Filtered Export.
//!
//! This module decides what gets exported and what each file is called.
//!
//! # Modules
//!
//! - [`traverse`] - Component deduplication over the occurrence tree and body collection
//! - [`naming`] - Name cleaning, file name derivation and per-run uniqueness
//! - [`export`] - Export coordination and result reporting
//!
//! # Export Workflow
//!
//! 1. **Flatten**: Walk the selected occurrences, one record per distinct component
//! 2. **Collect**: Gather the visible bodies of those components (STL only)
//! 3. **Prompt**: Ask for the destination folder
//! 4. **Name**: Derive a clean file name and make it unique within the run
//! 5. **Export**: Hand each body or component to the host exporter
//! 6. **Report**: Render the processed and skipped names
//!
//! # Example
//!
//! ```rust,no_run
//! use filtered_export::adapters::filesystem::FileSystemExporter;
//! use filtered_export::adapters::prompt::FixedFolder;
//! use filtered_export::adapters::snapshot::SnapshotDesign;
//! use filtered_export::core::export::{ExportCoordinator, Selection, StlExportOptions};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let design = SnapshotDesign::load("table.json")?;
//! let mut exporter = FileSystemExporter::new(&design);
//! let mut prompt = FixedFolder::new("out");
//!
//! let result = ExportCoordinator::new(&design, &mut exporter, &mut prompt)
//!     .run_stl_export(&Selection::Everything, &StlExportOptions::default())?;
//!
//! print!("{}", result.render());
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod naming;
pub mod traverse;
