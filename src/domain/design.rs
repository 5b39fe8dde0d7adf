//! Read-only views of the host's design tree
//!
//! These are the shapes the core works on. Hosts build them from their own
//! object model; the core never reaches back into the host except through the
//! traits in [`crate::adapters::host`].

use super::ids::{BodyId, ComponentId};
use serde::{Deserialize, Serialize};

/// A placed instance of a component within the assembly tree
///
/// Many occurrences may reference the same component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Occurrence name, e.g. `Leg:2`
    pub name: String,

    /// Referenced component, `None` for a broken link
    pub component: Option<ComponentId>,

    /// Visibility (light bulb) flag
    pub is_visible: bool,

    /// True when the occurrence is a referenced (linked) instance
    pub is_referenced: bool,

    /// Full path from the tree root, e.g. `Table:1+Leg:2`
    pub full_path: String,
}

impl Occurrence {
    /// Creates a visible, non-referenced occurrence
    pub fn new(
        name: impl Into<String>,
        component: Option<ComponentId>,
        full_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            component,
            is_visible: true,
            is_referenced: false,
            full_path: full_path.into(),
        }
    }

    /// Sets the visibility flag
    pub fn with_visibility(mut self, is_visible: bool) -> Self {
        self.is_visible = is_visible;
        self
    }

    /// Sets the referenced-instance flag
    pub fn with_referenced(mut self, is_referenced: bool) -> Self {
        self.is_referenced = is_referenced;
        self
    }
}

/// A solid or surface body owned by exactly one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    /// Host-assigned identity
    pub id: BodyId,

    /// Body name
    pub name: String,

    /// Visibility (light bulb) flag
    pub is_visible: bool,

    /// Owning component
    pub parent: ComponentId,
}

impl Body {
    /// Creates a visible body
    pub fn new(id: BodyId, name: impl Into<String>, parent: ComponentId) -> Self {
        Self {
            id,
            name: name.into(),
            is_visible: true,
            parent,
        }
    }

    /// Sets the visibility flag
    pub fn with_visibility(mut self, is_visible: bool) -> Self {
        self.is_visible = is_visible;
        self
    }
}

/// A reusable design definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Host-assigned identity
    pub id: ComponentId,

    /// Component name
    pub name: String,

    /// Bodies in host order
    pub bodies: Vec<Body>,

    /// True when the component places further occurrences
    pub has_child_occurrences: bool,
}

impl Component {
    /// Creates a component without bodies or child occurrences
    pub fn new(id: ComponentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            bodies: Vec::new(),
            has_child_occurrences: false,
        }
    }

    /// Appends a visible body named `name`
    pub fn with_body(mut self, name: impl Into<String>) -> Self {
        let id = BodyId::for_component(&self.id, self.bodies.len());
        self.bodies.push(Body::new(id, name, self.id.clone()));
        self
    }

    /// Sets whether the component places child occurrences
    pub fn with_child_occurrences(mut self, has_children: bool) -> Self {
        self.has_child_occurrences = has_children;
        self
    }

    /// A leaf owns bodies but no child occurrences
    pub fn is_leaf(&self) -> bool {
        !self.bodies.is_empty() && !self.has_child_occurrences
    }
}
