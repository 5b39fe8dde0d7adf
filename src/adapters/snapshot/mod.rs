//! JSON design snapshot host
//!
//! A snapshot stands in for the open design of the CAD host: components,
//! their bodies, the occurrences they place, and optional payload files that
//! play the role of the host's STL/STEP encoders.

pub mod design;
pub mod models;

pub use design::SnapshotDesign;
pub use models::{BodyModel, ComponentModel, OccurrenceModel, SnapshotDocument};
