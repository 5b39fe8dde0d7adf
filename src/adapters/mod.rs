//! External system integrations for Filtered Export.
//!
//! This module provides the collaborators the export core talks to:
//!
//! - [`host`] - Collaborator contracts (design access, file export, folder prompt)
//! - [`snapshot`] - Design model backed by a JSON design snapshot
//! - [`filesystem`] - Exporters writing into the destination folder (or not, for dry runs)
//! - [`prompt`] - Destination folder prompts
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate the CAD host and
//! enable testing with fake implementations. The core only ever sees the
//! traits in [`host`].
//!
//! ```rust,no_run
//! use filtered_export::adapters::host::DesignModel;
//! use filtered_export::adapters::snapshot::SnapshotDesign;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let design = SnapshotDesign::load("table.json")?;
//! for occurrence in design.root_occurrences() {
//!     println!("{}", occurrence.full_path);
//! }
//! # Ok(())
//! # }
//! ```

pub mod filesystem;
pub mod host;
pub mod prompt;
pub mod snapshot;
