//! Export orchestration
//!
//! This module provides the export commands of Filtered Export:
//! - Run inputs (selection, STEP mode, per-format options)
//! - Export coordination over the host collaborators
//! - Result summary and reporting

pub mod coordinator;
pub mod options;
pub mod summary;

pub use coordinator::ExportCoordinator;
pub use options::{Selection, StepExportMode, StepExportOptions, StlExportOptions};
pub use summary::ExportResult;
