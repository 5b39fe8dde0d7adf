//! File name derivation
//!
//! Builds the base name of an exported file from the selected naming
//! options, then makes it unique within the run's [`NameRegistry`].

use super::clean::{clean_component_path, clean_name};
use super::registry::NameRegistry;
use crate::domain::{Body, Component};
use serde::{Deserialize, Serialize};

/// How the component part of a file name is formed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComponentNameMode {
    /// The immediate parent component's name
    #[default]
    LastSegment,
    /// The cleaned full path of the originating occurrence
    FullPath,
}

/// Naming options for one export run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingOptions {
    /// Prefix the root component's name
    #[serde(default = "default_true")]
    pub add_root_name: bool,

    /// Include the component name
    #[serde(default = "default_true")]
    pub add_component_name: bool,

    /// Which component name to include
    #[serde(default)]
    pub component_name_mode: ComponentNameMode,

    /// Remove trailing ` v<digits>` version tags
    #[serde(default = "default_true")]
    pub strip_version_tag: bool,

    /// Trim and replace spaces with underscores
    #[serde(default = "default_true")]
    pub normalize_spacing: bool,

    /// Prefix the mesh refinement label (STL only)
    #[serde(default)]
    pub add_refinement_name: bool,

    /// Label used when `add_refinement_name` is set
    #[serde(skip)]
    pub refinement_label: String,
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            add_root_name: true,
            add_component_name: true,
            component_name_mode: ComponentNameMode::LastSegment,
            strip_version_tag: true,
            normalize_spacing: true,
            add_refinement_name: false,
            refinement_label: String::new(),
        }
    }
}

impl NamingOptions {
    /// Options that keep names as close to the CAD names as possible
    pub fn plain() -> Self {
        Self {
            add_root_name: false,
            add_component_name: false,
            component_name_mode: ComponentNameMode::LastSegment,
            strip_version_tag: false,
            normalize_spacing: false,
            add_refinement_name: false,
            refinement_label: String::new(),
        }
    }

    /// Sets the refinement label
    pub fn with_refinement_label(mut self, label: impl Into<String>) -> Self {
        self.refinement_label = label.into();
        self
    }

    fn clean(&self, raw: &str) -> String {
        clean_name(raw, self.strip_version_tag, self.normalize_spacing)
    }

    fn clean_path(&self, path: &str) -> String {
        clean_component_path(path, self.strip_version_tag, self.normalize_spacing)
    }
}

fn default_true() -> bool {
    true
}

/// Build the base (not yet unique) file name of a body
///
/// Parts are joined with `-` in this order, each one optional except the
/// last:
/// 1. the refinement label
/// 2. the root name, when the body's component is not the root or the
///    component name is not requested (the root name then stands in for it)
/// 3. the component name or cleaned originating path
/// 4. the body name
pub fn body_base_name(
    body: &Body,
    parent: &Component,
    originating_path: &str,
    root: &Component,
    options: &NamingOptions,
) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(4);

    if options.add_refinement_name {
        parts.push(options.refinement_label.clone());
    }

    if options.add_root_name && (body.parent != root.id || !options.add_component_name) {
        parts.push(options.clean(&root.name));
    }

    if options.add_component_name {
        parts.push(match options.component_name_mode {
            ComponentNameMode::LastSegment => options.clean(&parent.name),
            ComponentNameMode::FullPath => options.clean_path(originating_path),
        });
    }

    parts.push(options.clean(&body.name));
    parts.join("-")
}

/// Derive the unique file name of a body and claim it in `registry`
///
/// # Examples
///
/// ```
/// use filtered_export::core::naming::{derive_file_name, NameRegistry, NamingOptions};
/// use filtered_export::domain::{Component, ComponentId};
///
/// let root = Component::new(ComponentId::new("assy").unwrap(), "Assy");
/// let leg = Component::new(ComponentId::new("leg").unwrap(), "Leg").with_body("Foot");
/// let mut registry = NameRegistry::new();
///
/// let name = derive_file_name(&leg.bodies[0], &leg, "Leg:1", &root, &NamingOptions::default(), &mut registry);
/// assert_eq!(name, "Assy-Leg-Foot");
/// ```
pub fn derive_file_name(
    body: &Body,
    parent: &Component,
    originating_path: &str,
    root: &Component,
    options: &NamingOptions,
    registry: &mut NameRegistry,
) -> String {
    let base = body_base_name(body, parent, originating_path, root, options);
    registry.claim(&base)
}

/// Derive the unique file name of a whole component and claim it
///
/// The component name takes the place of the body name. The root name is
/// prefixed when requested unless the component is the root itself; the full
/// path replaces the component name in `FullPath` mode.
pub fn derive_component_file_name(
    component: &Component,
    originating_path: &str,
    root: &Component,
    options: &NamingOptions,
    registry: &mut NameRegistry,
) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(2);

    if options.add_root_name && component.id != root.id {
        parts.push(options.clean(&root.name));
    }

    parts.push(
        if options.add_component_name && options.component_name_mode == ComponentNameMode::FullPath
        {
            options.clean_path(originating_path)
        } else {
            options.clean(&component.name)
        },
    );

    registry.claim(&parts.join("-"))
}
