//! Filesystem exporters
//!
//! Output files are written directly into the chosen destination folder;
//! the extension (`.stl` / `.step`) is appended to the derived file name.

pub mod exporter;

pub use exporter::{DryRunExporter, FileSystemExporter};
