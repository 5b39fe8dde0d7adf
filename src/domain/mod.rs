//! Domain models and types for filtered-export.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ComponentId`], [`BodyId`])
//! - **Design views** ([`Occurrence`], [`Component`], [`Body`])
//! - **Error types** ([`FilteredExportError`], [`HostError`])
//! - **Result type alias** ([`Result`])
//!
//! Component identity is an opaque key. Two occurrences placing the same
//! component carry equal [`ComponentId`]s:
//!
//! ```rust
//! use filtered_export::domain::{ComponentId, Occurrence};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let leg = ComponentId::new("leg")?;
//! let first = Occurrence::new("Leg:1", Some(leg.clone()), "Leg:1");
//! let second = Occurrence::new("Leg:2", Some(leg), "Leg:2");
//! assert_eq!(first.component, second.component);
//! # Ok(())
//! # }
//! ```

pub mod design;
pub mod errors;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use design::{Body, Component, Occurrence};
pub use errors::{FilteredExportError, HostError};
pub use ids::{BodyId, ComponentId};
pub use result::Result;
