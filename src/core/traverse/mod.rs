//! Occurrence tree traversal
//!
//! - [`flatten`] - depth-first component deduplication
//! - [`bodies`] - visible-body collection over the flattened components

pub mod bodies;
pub mod flatten;

pub use bodies::{collect_bodies, CollectedBody};
pub use flatten::{flatten_occurrences, ComponentRecord, TraversalOptions};
