// Filtered Export - STL/STEP export without duplicates
// Copyright (c) 2025 Filtered Export Contributors
// Licensed under the MIT License

//! # Filtered Export - STL/STEP export without duplicates
//!
//! Filtered Export writes the bodies or components of a CAD design to STL or
//! STEP files, once per distinct component, with clean and collision-free
//! file names derived from the component hierarchy.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Flattening** an occurrence tree into one record per distinct component
//! - **Collecting** the visible bodies of those components
//! - **Naming** each file deterministically, unique within one export run
//! - **Exporting** through a host collaborator (STL per body, STEP per component)
//!
//! ## Architecture
//!
//! Filtered Export follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (traversal, naming, export coordination)
//! - [`adapters`] - Host contracts and implementations (design snapshot, filesystem)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use filtered_export::adapters::filesystem::FileSystemExporter;
//! use filtered_export::adapters::prompt::FixedFolder;
//! use filtered_export::adapters::snapshot::SnapshotDesign;
//! use filtered_export::core::export::{ExportCoordinator, StepExportMode};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = filtered_export::config::load_config("filtered-export.toml")?;
//!     let design = SnapshotDesign::load("table.json")?;
//!     let selection = design.resolve_selection(&[])?;
//!
//!     let mut exporter = FileSystemExporter::new(&design);
//!     let mut prompt = FixedFolder::new("exports");
//!     let result = ExportCoordinator::new(&design, &mut exporter, &mut prompt)
//!         .run_step_export(&selection, StepExportMode::Leaves, &config.step_options())?;
//!
//!     print!("{}", result.render());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! ### Deduplication
//!
//! Assemblies place the same component many times. Only the first occurrence
//! of a component is recorded, and the traversal does not descend twice into
//! the same component:
//!
//! ```rust
//! use filtered_export::core::traverse::{flatten_occurrences, TraversalOptions};
//! use filtered_export::domain::{ComponentId, Occurrence};
//!
//! let leg = ComponentId::new("leg").unwrap();
//! let roots = vec![
//!     Occurrence::new("Leg:1", Some(leg.clone()), "Leg:1"),
//!     Occurrence::new("Leg:2", Some(leg), "Leg:2"),
//! ];
//!
//! let records = flatten_occurrences(&roots, |_| Vec::new(), TraversalOptions::recursive());
//! assert_eq!(records.len(), 1);
//! ```
//!
//! ### File Naming
//!
//! Names are cleaned (version tags, spaces, colons, dots) and made unique
//! with `_(n)` suffixes:
//!
//! ```rust
//! use filtered_export::core::naming::{clean_name, NameRegistry};
//!
//! assert_eq!(clean_name("Bracket v3", true, false), "Bracket");
//! assert_eq!(clean_name("Part 1.2", false, false), "Part 1__2");
//!
//! let mut registry = NameRegistry::new();
//! assert_eq!(registry.claim("Arm"), "Arm");
//! assert_eq!(registry.claim("Arm"), "Arm_(1)");
//! ```
//!
//! ## Error Handling
//!
//! Filtered Export uses the [`domain::FilteredExportError`] type for all errors.
//! [`FilteredExportError::is_expected`](domain::FilteredExportError::is_expected)
//! separates the conditions a user can act on (no design, no folder, no bodies)
//! from unexpected failures.
//!
//! ## Logging
//!
//! Filtered Export uses structured logging with the `tracing` crate; every
//! export run opens a span carrying a `run_id`.
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting export");
//! warn!(path = "Leg:3", "Occurrence not found");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
