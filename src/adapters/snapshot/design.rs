//! Design model backed by a JSON snapshot

use super::models::{ComponentModel, SnapshotDocument};
use crate::adapters::host::DesignModel;
use crate::core::export::Selection;
use crate::domain::ids::{BodyId, ComponentId};
use crate::domain::{Body, Component, FilteredExportError, Occurrence, Result};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// An occurrence as placed inside its parent component
#[derive(Debug, Clone)]
struct Placement {
    name: String,
    component: Option<ComponentId>,
    visible: bool,
    referenced: bool,
}

/// A design loaded from a snapshot document
///
/// Occurrence full paths are built on the fly while the tree is walked, so
/// the same placement yields a different path under each parent occurrence.
#[derive(Debug, Clone)]
pub struct SnapshotDesign {
    name: String,
    root: Component,
    components: HashMap<ComponentId, Component>,
    placements: HashMap<ComponentId, Vec<Placement>>,
    body_payloads: HashMap<BodyId, PathBuf>,
    step_payloads: HashMap<ComponentId, PathBuf>,
}

impl SnapshotDesign {
    /// Load a snapshot file
    ///
    /// Payload paths are resolved against the directory of the file.
    ///
    /// # Errors
    ///
    /// - [`FilteredExportError::NoActiveDesign`] when the file does not exist
    /// - [`FilteredExportError::Design`] when the document is malformed or inconsistent
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            tracing::warn!(path = %path.display(), "Design snapshot not found");
            return Err(FilteredExportError::NoActiveDesign);
        }

        let content = std::fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

        let design = Self::from_json(&content, base_dir).map_err(|e| match e {
            FilteredExportError::Design(message) => {
                FilteredExportError::Design(format!("{}: {message}", path.display()))
            }
            other => other,
        })?;

        tracing::info!(
            path = %path.display(),
            design = %design.name,
            components = design.components.len() + 1,
            "Design snapshot loaded"
        );

        Ok(design)
    }

    /// Parse a snapshot document
    ///
    /// # Errors
    ///
    /// Returns [`FilteredExportError::Design`] for invalid JSON, duplicate or
    /// unknown component ids, a missing root, a component that places itself,
    /// or an occurrence name containing `+`.
    pub fn from_json(content: &str, base_dir: &Path) -> Result<Self> {
        let document: SnapshotDocument = serde_json::from_str(content)
            .map_err(|e| FilteredExportError::Design(format!("Invalid design snapshot: {e}")))?;

        Self::from_document(document, base_dir)
    }

    /// Build the design from a parsed document
    ///
    /// # Errors
    ///
    /// Returns [`FilteredExportError::Design`] when the document is inconsistent.
    pub fn from_document(document: SnapshotDocument, base_dir: &Path) -> Result<Self> {
        let mut names: HashMap<ComponentId, String> = HashMap::new();
        for model in &document.components {
            let id = parse_id(&model.id)?;
            if names.insert(id, model.name.clone()).is_some() {
                return Err(FilteredExportError::Design(format!(
                    "Duplicate component id '{}'",
                    model.id
                )));
            }
        }

        let root_id = parse_id(&document.root)?;
        if !names.contains_key(&root_id) {
            return Err(FilteredExportError::Design(format!(
                "Root component '{}' is not defined",
                document.root
            )));
        }

        let mut components = HashMap::new();
        let mut placements = HashMap::new();
        let mut body_payloads = HashMap::new();
        let mut step_payloads = HashMap::new();

        for model in &document.components {
            let id = parse_id(&model.id)?;

            let component = build_component(&id, model, base_dir, &mut body_payloads);
            if let Some(payload) = &model.step_payload {
                step_payloads.insert(id.clone(), base_dir.join(payload));
            }

            placements.insert(id.clone(), build_placements(&id, model, &names)?);
            components.insert(id, component);
        }

        for id in names.keys() {
            ensure_acyclic(id, &placements, &names)?;
        }

        let root = components.remove(&root_id).ok_or_else(|| {
            FilteredExportError::Design(format!("Root component '{root_id}' is not defined"))
        })?;

        Ok(Self {
            name: document.name,
            root,
            components,
            placements,
            body_payloads,
            step_payloads,
        })
    }

    /// Resolve `--select` paths to a selection
    ///
    /// No path selects everything. The root component's name, given alone,
    /// selects the root component. Any other path must be the full path of
    /// an occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`FilteredExportError::Selection`] for a path that names no
    /// occurrence, or for the root name mixed with other paths.
    pub fn resolve_selection(&self, paths: &[String]) -> Result<Selection> {
        if paths.is_empty() {
            return Ok(Selection::Everything);
        }

        if paths.iter().any(|path| *path == self.root.name) {
            if paths.len() > 1 {
                return Err(FilteredExportError::Selection(format!(
                    "The root component '{}' cannot be selected together with other occurrences",
                    self.root.name
                )));
            }
            return Ok(Selection::RootComponent);
        }

        let occurrences = paths
            .iter()
            .map(|path| {
                self.find_occurrence(path).ok_or_else(|| {
                    FilteredExportError::Selection(format!(
                        "No occurrence with path '{path}' in design '{}'",
                        self.name
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Selection::Occurrences(occurrences))
    }

    /// Find an occurrence by its full path
    pub fn find_occurrence(&self, full_path: &str) -> Option<Occurrence> {
        let mut candidates = self.root_occurrences();
        let mut segments = full_path.split('+').peekable();

        while let Some(segment) = segments.next() {
            let occurrence = candidates.into_iter().find(|o| o.name == segment)?;
            if segments.peek().is_none() {
                return Some(occurrence);
            }
            candidates = self.child_occurrences(&occurrence);
        }

        None
    }

    /// Mesh file standing in for a body
    pub fn body_payload(&self, id: &BodyId) -> Option<&Path> {
        self.body_payloads.get(id).map(PathBuf::as_path)
    }

    /// STEP file standing in for a component
    pub fn step_payload(&self, id: &ComponentId) -> Option<&Path> {
        self.step_payloads.get(id).map(PathBuf::as_path)
    }

    fn occurrences_in(&self, component: &ComponentId, parent_path: Option<&str>) -> Vec<Occurrence> {
        self.placements
            .get(component)
            .map(|placements| {
                placements
                    .iter()
                    .map(|placement| {
                        let full_path = match parent_path {
                            Some(parent) => format!("{parent}+{}", placement.name),
                            None => placement.name.clone(),
                        };
                        Occurrence::new(placement.name.clone(), placement.component.clone(), full_path)
                            .with_visibility(placement.visible)
                            .with_referenced(placement.referenced)
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl DesignModel for SnapshotDesign {
    fn design_name(&self) -> &str {
        &self.name
    }

    fn root_component(&self) -> &Component {
        &self.root
    }

    fn root_occurrences(&self) -> Vec<Occurrence> {
        self.occurrences_in(&self.root.id, None)
    }

    fn child_occurrences(&self, occurrence: &Occurrence) -> Vec<Occurrence> {
        match &occurrence.component {
            Some(component) => self.occurrences_in(component, Some(&occurrence.full_path)),
            None => Vec::new(),
        }
    }

    fn component(&self, id: &ComponentId) -> Option<&Component> {
        if *id == self.root.id {
            return Some(&self.root);
        }
        self.components.get(id)
    }
}

fn parse_id(value: &str) -> Result<ComponentId> {
    ComponentId::new(value).map_err(FilteredExportError::Design)
}

fn build_component(
    id: &ComponentId,
    model: &ComponentModel,
    base_dir: &Path,
    body_payloads: &mut HashMap<BodyId, PathBuf>,
) -> Component {
    let mut component =
        Component::new(id.clone(), model.name.clone()).with_child_occurrences(!model.occurrences.is_empty());

    for (index, body) in model.bodies.iter().enumerate() {
        let body_id = BodyId::for_component(id, index);
        if let Some(payload) = &body.payload {
            body_payloads.insert(body_id.clone(), base_dir.join(payload));
        }
        component
            .bodies
            .push(Body::new(body_id, body.name.clone(), id.clone()).with_visibility(body.visible));
    }

    component
}

fn build_placements(
    parent: &ComponentId,
    model: &ComponentModel,
    names: &HashMap<ComponentId, String>,
) -> Result<Vec<Placement>> {
    let mut counts: HashMap<Option<ComponentId>, usize> = HashMap::new();
    let mut placements = Vec::with_capacity(model.occurrences.len());

    for occurrence in &model.occurrences {
        let component = occurrence.component.as_deref().map(parse_id).transpose()?;

        let component_name: &str = match &component {
            Some(id) => names.get(id).ok_or_else(|| {
                FilteredExportError::Design(format!(
                    "Component '{parent}' places unknown component '{id}'"
                ))
            })?,
            None => "Unresolved",
        };

        let count = counts.entry(component.clone()).or_insert(0);
        *count += 1;

        let name = occurrence
            .name
            .clone()
            .unwrap_or_else(|| format!("{component_name}:{count}"));

        // '+' separates the segments of a full path
        if name.contains('+') {
            return Err(FilteredExportError::Design(format!(
                "Occurrence '{name}' in component '{parent}' contains '+'"
            )));
        }

        placements.push(Placement {
            name,
            component,
            visible: occurrence.visible,
            referenced: occurrence.referenced,
        });
    }

    Ok(placements)
}

fn ensure_acyclic(
    start: &ComponentId,
    placements: &HashMap<ComponentId, Vec<Placement>>,
    names: &HashMap<ComponentId, String>,
) -> Result<()> {
    fn visit(
        id: &ComponentId,
        placements: &HashMap<ComponentId, Vec<Placement>>,
        names: &HashMap<ComponentId, String>,
        path: &mut Vec<ComponentId>,
        done: &mut HashSet<ComponentId>,
    ) -> Result<()> {
        if done.contains(id) {
            return Ok(());
        }
        if path.contains(id) {
            let cycle = path
                .iter()
                .chain(std::iter::once(id))
                .map(|c| names.get(c).map_or(c.as_str(), String::as_str))
                .collect::<Vec<_>>()
                .join(" > ");
            return Err(FilteredExportError::Design(format!(
                "Component places itself: {cycle}"
            )));
        }

        path.push(id.clone());
        for child in placements.get(id).into_iter().flatten() {
            if let Some(child_id) = &child.component {
                visit(child_id, placements, names, path, done)?;
            }
        }
        path.pop();
        done.insert(id.clone());

        Ok(())
    }

    visit(start, placements, names, &mut Vec::new(), &mut HashSet::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"{
        "name": "Table v4",
        "root": "assy",
        "components": [
            {"id": "assy", "name": "Assy", "bodies": [],
             "occurrences": [{"component": "leg", "name": "Leg:1"},
                             {"component": "leg"},
                             {"component": "top", "visible": true, "referenced": false}]},
            {"id": "leg", "name": "Leg",
             "bodies": [{"name": "Foot", "visible": true, "payload": "meshes/foot.stl"}],
             "occurrences": [{"component": "pad"}]},
            {"id": "pad", "name": "Pad", "bodies": [{"name": "Rubber", "visible": false}]},
            {"id": "top", "name": "Top", "bodies": [{"name": "Surface"}],
             "step_payload": "step/top.step"}
        ]
    }"#;

    fn table() -> SnapshotDesign {
        SnapshotDesign::from_json(TABLE, Path::new("/designs")).unwrap()
    }

    fn id(value: &str) -> ComponentId {
        ComponentId::new(value).unwrap()
    }

    #[test]
    fn test_root_occurrences_get_default_names() {
        let design = table();
        let names: Vec<_> = design
            .root_occurrences()
            .into_iter()
            .map(|o| o.full_path)
            .collect();
        assert_eq!(names, ["Leg:1", "Leg:2", "Top:1"]);
        assert_eq!(design.design_name(), "Table v4");
        assert_eq!(design.root_component().name, "Assy");
    }

    #[test]
    fn test_child_paths_are_joined_with_plus() {
        let design = table();
        let leg = &design.root_occurrences()[1];
        let children = design.child_occurrences(leg);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].full_path, "Leg:2+Pad:1");
        assert_eq!(children[0].component, Some(id("pad")));
    }

    #[test]
    fn test_components_and_bodies() {
        let design = table();
        let leg = design.component(&id("leg")).unwrap();
        assert!(leg.has_child_occurrences);
        assert_eq!(leg.bodies[0].name, "Foot");

        let pad = design.component(&id("pad")).unwrap();
        assert!(!pad.bodies[0].is_visible);
        assert!(pad.is_leaf());

        assert!(design.component(&id("assy")).is_some());
        assert!(design.component(&id("missing")).is_none());
    }

    #[test]
    fn test_payloads_resolve_against_base_dir() {
        let design = table();
        let foot = BodyId::for_component(&id("leg"), 0);
        assert_eq!(
            design.body_payload(&foot),
            Some(Path::new("/designs/meshes/foot.stl"))
        );
        assert_eq!(
            design.step_payload(&id("top")),
            Some(Path::new("/designs/step/top.step"))
        );
        assert!(design.step_payload(&id("leg")).is_none());
    }

    #[test]
    fn test_resolve_selection() {
        let design = table();

        assert_eq!(design.resolve_selection(&[]).unwrap(), Selection::Everything);
        assert_eq!(
            design.resolve_selection(&["Assy".to_string()]).unwrap(),
            Selection::RootComponent
        );

        match design.resolve_selection(&["Leg:2+Pad:1".to_string()]).unwrap() {
            Selection::Occurrences(occurrences) => {
                assert_eq!(occurrences.len(), 1);
                assert_eq!(occurrences[0].full_path, "Leg:2+Pad:1");
            }
            other => panic!("unexpected selection: {other:?}"),
        }

        let error = design.resolve_selection(&["Leg:3".to_string()]).unwrap_err();
        assert!(matches!(error, FilteredExportError::Selection(_)));
    }

    #[test]
    fn test_rejects_plus_in_default_occurrence_names() {
        let json = r#"{"name": "D", "root": "r", "components": [
            {"id": "r", "name": "R", "occurrences": [{"component": "a"}]},
            {"id": "a", "name": "Nut+Bolt"}
        ]}"#;
        let error = SnapshotDesign::from_json(json, Path::new(".")).unwrap_err();
        assert!(error.to_string().contains("Nut+Bolt:1"));
    }

    #[test]
    fn test_root_selection_cannot_be_mixed() {
        let design = table();
        let error = design
            .resolve_selection(&["Leg:1".to_string(), "Assy".to_string()])
            .unwrap_err();
        assert!(matches!(error, FilteredExportError::Selection(_)));
        assert!(error.to_string().contains("Assy"));
    }

    #[test]
    fn test_rejects_plus_in_occurrence_names() {
        let json = r#"{"name": "D", "root": "r", "components": [
            {"id": "r", "name": "R", "occurrences": [{"component": "a", "name": "A+B:1"}]},
            {"id": "a", "name": "A"}
        ]}"#;
        let error = SnapshotDesign::from_json(json, Path::new(".")).unwrap_err();
        assert!(matches!(error, FilteredExportError::Design(_)));
        assert!(error.to_string().contains("A+B:1"));
    }

    #[test]
    fn test_broken_link_has_no_children() {
        let json = r#"{"name": "D", "root": "r", "components": [
            {"id": "r", "name": "R", "occurrences": [{"component": null}]}
        ]}"#;
        let design = SnapshotDesign::from_json(json, Path::new(".")).unwrap();
        let roots = design.root_occurrences();
        assert_eq!(roots[0].name, "Unresolved:1");
        assert!(roots[0].component.is_none());
        assert!(design.child_occurrences(&roots[0]).is_empty());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"{"name": "D", "root": "r", "components": [
            {"id": "r", "name": "R"}, {"id": "r", "name": "Again"}
        ]}"#;
        let error = SnapshotDesign::from_json(json, Path::new(".")).unwrap_err();
        assert!(error.to_string().contains("Duplicate component id"));
    }

    #[test]
    fn test_rejects_missing_root() {
        let json = r#"{"name": "D", "root": "x", "components": [{"id": "r", "name": "R"}]}"#;
        let error = SnapshotDesign::from_json(json, Path::new(".")).unwrap_err();
        assert!(matches!(error, FilteredExportError::Design(_)));
    }

    #[test]
    fn test_rejects_unknown_reference() {
        let json = r#"{"name": "D", "root": "r", "components": [
            {"id": "r", "name": "R", "occurrences": [{"component": "ghost"}]}
        ]}"#;
        let error = SnapshotDesign::from_json(json, Path::new(".")).unwrap_err();
        assert!(error.to_string().contains("ghost"));
    }

    #[test]
    fn test_rejects_cycles() {
        let json = r#"{"name": "D", "root": "r", "components": [
            {"id": "r", "name": "R", "occurrences": [{"component": "a"}]},
            {"id": "a", "name": "A", "occurrences": [{"component": "b"}]},
            {"id": "b", "name": "B", "occurrences": [{"component": "a"}]}
        ]}"#;
        let error = SnapshotDesign::from_json(json, Path::new(".")).unwrap_err();
        assert!(error.to_string().contains("places itself"));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let error = SnapshotDesign::from_json("{", Path::new(".")).unwrap_err();
        assert!(matches!(error, FilteredExportError::Design(_)));
    }

    #[test]
    fn test_load_missing_file_is_no_active_design() {
        let error = SnapshotDesign::load("/nonexistent/design.json").unwrap_err();
        assert!(matches!(error, FilteredExportError::NoActiveDesign));
    }
}
