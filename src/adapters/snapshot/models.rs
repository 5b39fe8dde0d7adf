//! Design snapshot document models
//!
//! These models mirror the JSON snapshot format and are kept separate from
//! the domain types. Conversion and validation happen in
//! [`SnapshotDesign`](super::SnapshotDesign).

use serde::{Deserialize, Serialize};

/// A design snapshot document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDocument {
    /// Design name
    pub name: String,

    /// Id of the root component
    pub root: String,

    /// Every component of the design
    pub components: Vec<ComponentModel>,
}

/// A component definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentModel {
    /// Unique component id
    pub id: String,

    /// Display name
    pub name: String,

    /// Bodies owned by the component
    #[serde(default)]
    pub bodies: Vec<BodyModel>,

    /// Occurrences placed in the component
    #[serde(default)]
    pub occurrences: Vec<OccurrenceModel>,

    /// STEP file standing in for the component geometry, relative to the snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_payload: Option<String>,
}

/// A body definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyModel {
    /// Display name
    pub name: String,

    /// Visibility flag
    #[serde(default = "default_true")]
    pub visible: bool,

    /// STL file standing in for the body mesh, relative to the snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

/// An occurrence placed inside a component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccurrenceModel {
    /// Placed component id; `None` is a broken link
    pub component: Option<String>,

    /// Occurrence name, defaults to `<component name>:<n>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Visibility flag
    #[serde(default = "default_true")]
    pub visible: bool,

    /// Linked from another design
    #[serde(default)]
    pub referenced: bool,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occurrence_defaults() {
        let occurrence: OccurrenceModel = serde_json::from_str(r#"{"component": "leg"}"#).unwrap();
        assert_eq!(occurrence.component.as_deref(), Some("leg"));
        assert!(occurrence.name.is_none());
        assert!(occurrence.visible);
        assert!(!occurrence.referenced);
    }

    #[test]
    fn test_broken_link_occurrence() {
        let occurrence: OccurrenceModel =
            serde_json::from_str(r#"{"component": null, "name": "Missing:1"}"#).unwrap();
        assert!(occurrence.component.is_none());
    }

    #[test]
    fn test_component_defaults() {
        let component: ComponentModel =
            serde_json::from_str(r#"{"id": "top", "name": "Top"}"#).unwrap();
        assert!(component.bodies.is_empty());
        assert!(component.occurrences.is_empty());
        assert!(component.step_payload.is_none());
    }

    #[test]
    fn test_body_defaults() {
        let body: BodyModel = serde_json::from_str(r#"{"name": "Surface"}"#).unwrap();
        assert!(body.visible);
        assert!(body.payload.is_none());
    }
}
