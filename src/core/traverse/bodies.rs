//! Body collection over flattened components

use super::flatten::ComponentRecord;
use crate::domain::ids::ComponentId;
use crate::domain::{Body, Component, FilteredExportError, Result};

/// A visible body together with the path its component was reached by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedBody {
    /// The body to export
    pub body: Body,

    /// Originating path of the owning component's record
    pub originating_path: String,
}

/// Collect the visible bodies of every recorded component
///
/// Record order and per-component body order are preserved. `component_of`
/// resolves a record's identity to the host component.
///
/// # Errors
///
/// - [`FilteredExportError::NoBodiesFound`] when no visible body remains
/// - [`FilteredExportError::Design`] when a record names an unknown component
pub fn collect_bodies<'a, F>(
    records: &[ComponentRecord],
    component_of: F,
) -> Result<Vec<CollectedBody>>
where
    F: Fn(&ComponentId) -> Option<&'a Component>,
{
    let mut bodies = Vec::new();

    for record in records {
        let component = component_of(&record.component).ok_or_else(|| {
            FilteredExportError::Design(format!(
                "Component '{}' reached via '{}' is not part of the design",
                record.component, record.originating_path
            ))
        })?;

        for body in component.bodies.iter().filter(|b| b.is_visible) {
            bodies.push(CollectedBody {
                body: body.clone(),
                originating_path: record.originating_path.clone(),
            });
        }
    }

    if bodies.is_empty() {
        tracing::warn!(components = records.len(), "No visible bodies found");
        return Err(FilteredExportError::NoBodiesFound);
    }

    tracing::debug!(
        components = records.len(),
        bodies = bodies.len(),
        "Collected bodies"
    );

    Ok(bodies)
}
