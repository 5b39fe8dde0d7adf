//! Component deduplication traversal
//!
//! Walks the occurrence tree depth-first (pre-order) and records every
//! distinct component once, in order of first appearance. Assemblies place
//! the same component many times; exporting once per component rather than
//! once per occurrence keeps the output free of duplicates.

use crate::domain::ids::ComponentId;
use crate::domain::Occurrence;
use std::collections::HashSet;

/// A distinct component reached by the traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord {
    /// Component identity
    pub component: ComponentId,

    /// Full path of the first occurrence that reached the component
    pub originating_path: String,
}

impl ComponentRecord {
    /// Create a new record
    pub fn new(component: ComponentId, originating_path: impl Into<String>) -> Self {
        Self {
            component,
            originating_path: originating_path.into(),
        }
    }
}

/// Traversal switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraversalOptions {
    /// Descend into the children of newly recorded components
    pub include_children: bool,

    /// Skip referenced (linked) occurrences and everything below them
    pub filter_linked_components: bool,
}

impl TraversalOptions {
    /// Recursive traversal without link filtering
    pub fn recursive() -> Self {
        Self {
            include_children: true,
            filter_linked_components: false,
        }
    }

    /// Only the given occurrences, no descent
    pub fn top_level() -> Self {
        Self::default()
    }

    /// Sets the linked-component filter
    pub fn with_filter_linked_components(mut self, filter: bool) -> Self {
        self.filter_linked_components = filter;
        self
    }
}

/// Flatten an occurrence tree into a deduplicated list of components
///
/// `children_of` enumerates the child occurrences of a node. It is only
/// called for nodes the traversal actually descends into.
///
/// Rules, per node in order:
/// - referenced nodes are skipped (with their subtree) when
///   `filter_linked_components` is set
/// - hidden nodes are skipped with their subtree
/// - a component not seen before is recorded with the node's full path;
///   later occurrences of it keep the first path
/// - the traversal descends only below nodes whose component was not a
///   duplicate
///
/// # Examples
///
/// ```
/// use filtered_export::core::traverse::{flatten_occurrences, TraversalOptions};
/// use filtered_export::domain::{ComponentId, Occurrence};
///
/// let leg = ComponentId::new("leg").unwrap();
/// let roots = vec![
///     Occurrence::new("Leg:1", Some(leg.clone()), "Leg:1"),
///     Occurrence::new("Leg:2", Some(leg), "Leg:2"),
/// ];
///
/// let records = flatten_occurrences(&roots, |_| Vec::new(), TraversalOptions::recursive());
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].originating_path, "Leg:1");
/// ```
pub fn flatten_occurrences<F>(
    roots: &[Occurrence],
    children_of: F,
    options: TraversalOptions,
) -> Vec<ComponentRecord>
where
    F: Fn(&Occurrence) -> Vec<Occurrence>,
{
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    visit(roots, &children_of, options, &mut seen, &mut records);

    tracing::debug!(
        roots = roots.len(),
        components = records.len(),
        include_children = options.include_children,
        filter_linked_components = options.filter_linked_components,
        "Flattened occurrence tree"
    );

    records
}

fn visit<F>(
    occurrences: &[Occurrence],
    children_of: &F,
    options: TraversalOptions,
    seen: &mut HashSet<ComponentId>,
    records: &mut Vec<ComponentRecord>,
) where
    F: Fn(&Occurrence) -> Vec<Occurrence>,
{
    for occurrence in occurrences {
        if options.filter_linked_components && occurrence.is_referenced {
            tracing::trace!(path = %occurrence.full_path, "Skipping linked occurrence");
            continue;
        }

        if !occurrence.is_visible {
            tracing::trace!(path = %occurrence.full_path, "Skipping hidden occurrence");
            continue;
        }

        // A broken link records nothing but does not count as a duplicate.
        let duplicate = match &occurrence.component {
            Some(component) if seen.contains(component) => true,
            Some(component) => {
                seen.insert(component.clone());
                records.push(ComponentRecord::new(
                    component.clone(),
                    occurrence.full_path.clone(),
                ));
                false
            }
            None => false,
        };

        if duplicate || !options.include_children {
            continue;
        }

        let children = children_of(occurrence);
        if !children.is_empty() {
            visit(&children, children_of, options, seen, records);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    fn id(s: &str) -> ComponentId {
        ComponentId::new(s).unwrap()
    }

    fn occ(name: &str, component: &str, path: &str) -> Occurrence {
        Occurrence::new(name, Some(id(component)), path)
    }

    /// Fake tree keyed by full path
    struct FakeTree {
        children: HashMap<String, Vec<Occurrence>>,
    }

    impl FakeTree {
        fn new() -> Self {
            Self {
                children: HashMap::new(),
            }
        }

        fn add(&mut self, parent_path: &str, child: Occurrence) {
            self.children
                .entry(parent_path.to_string())
                .or_default()
                .push(child);
        }

        fn children_of(&self, occurrence: &Occurrence) -> Vec<Occurrence> {
            self.children
                .get(&occurrence.full_path)
                .cloned()
                .unwrap_or_default()
        }
    }

    fn components(records: &[ComponentRecord]) -> Vec<&str> {
        records.iter().map(|r| r.component.as_str()).collect()
    }

    #[test]
    fn test_empty_roots() {
        let records = flatten_occurrences(&[], |_| Vec::new(), TraversalOptions::recursive());
        assert!(records.is_empty());
    }

    #[test]
    fn test_dedup_keeps_one_record_per_component() {
        let roots = vec![
            occ("Leg:1", "leg", "Leg:1"),
            occ("Leg:2", "leg", "Leg:2"),
            occ("Top:1", "top", "Top:1"),
            occ("Leg:3", "leg", "Leg:3"),
        ];

        let records = flatten_occurrences(&roots, |_| Vec::new(), TraversalOptions::recursive());
        assert_eq!(components(&records), vec!["leg", "top"]);
    }

    #[test]
    fn test_first_path_wins() {
        let mut tree = FakeTree::new();
        tree.add("Frame:1", occ("Bolt:1", "bolt", "Frame:1+Bolt:1"));
        tree.add("Panel:1", occ("Bolt:1", "bolt", "Panel:1+Bolt:1"));

        let roots = vec![occ("Frame:1", "frame", "Frame:1"), occ("Panel:1", "panel", "Panel:1")];
        let records =
            flatten_occurrences(&roots, |o| tree.children_of(o), TraversalOptions::recursive());

        assert_eq!(components(&records), vec!["frame", "bolt", "panel"]);
        assert_eq!(records[1].originating_path, "Frame:1+Bolt:1");
    }

    #[test]
    fn test_pre_order_traversal() {
        let mut tree = FakeTree::new();
        tree.add("A:1", occ("B:1", "b", "A:1+B:1"));
        tree.add("A:1+B:1", occ("C:1", "c", "A:1+B:1+C:1"));
        tree.add("A:1", occ("D:1", "d", "A:1+D:1"));

        let roots = vec![occ("A:1", "a", "A:1"), occ("E:1", "e", "E:1")];
        let records =
            flatten_occurrences(&roots, |o| tree.children_of(o), TraversalOptions::recursive());

        assert_eq!(components(&records), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_no_descent_below_duplicates() {
        let mut tree = FakeTree::new();
        tree.add("Leg:1", occ("Foot:1", "foot", "Leg:1+Foot:1"));
        tree.add("Leg:2", occ("Pad:1", "pad", "Leg:2+Pad:1"));

        let asked = RefCell::new(Vec::new());
        let roots = vec![occ("Leg:1", "leg", "Leg:1"), occ("Leg:2", "leg", "Leg:2")];
        let records = flatten_occurrences(
            &roots,
            |o| {
                asked.borrow_mut().push(o.full_path.clone());
                tree.children_of(o)
            },
            TraversalOptions::recursive(),
        );

        assert_eq!(components(&records), vec!["leg", "foot"]);
        assert!(!asked.borrow().contains(&"Leg:2".to_string()));
    }

    #[test]
    fn test_top_level_does_not_descend() {
        let mut tree = FakeTree::new();
        tree.add("A:1", occ("B:1", "b", "A:1+B:1"));

        let roots = vec![occ("A:1", "a", "A:1")];
        let records =
            flatten_occurrences(&roots, |o| tree.children_of(o), TraversalOptions::top_level());

        assert_eq!(components(&records), vec!["a"]);
    }

    #[test]
    fn test_hidden_occurrences_are_skipped_with_subtree() {
        let mut tree = FakeTree::new();
        tree.add("A:1", occ("B:1", "b", "A:1+B:1"));

        let roots = vec![
            occ("A:1", "a", "A:1").with_visibility(false),
            occ("C:1", "c", "C:1"),
        ];
        let records =
            flatten_occurrences(&roots, |o| tree.children_of(o), TraversalOptions::recursive());

        assert_eq!(components(&records), vec!["c"]);
    }

    #[test]
    fn test_hidden_first_occurrence_does_not_claim_path() {
        let roots = vec![
            occ("Leg:1", "leg", "Leg:1").with_visibility(false),
            occ("Leg:2", "leg", "Leg:2"),
        ];
        let records = flatten_occurrences(&roots, |_| Vec::new(), TraversalOptions::recursive());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].originating_path, "Leg:2");
    }

    #[test]
    fn test_linked_filter_skips_referenced_occurrences() {
        let mut tree = FakeTree::new();
        tree.add("Lib:1", occ("Screw:1", "screw", "Lib:1+Screw:1"));

        let roots = vec![
            occ("Lib:1", "lib", "Lib:1").with_referenced(true),
            occ("Own:1", "own", "Own:1"),
        ];

        let filtered = flatten_occurrences(
            &roots,
            |o| tree.children_of(o),
            TraversalOptions::recursive().with_filter_linked_components(true),
        );
        assert_eq!(components(&filtered), vec!["own"]);

        let unfiltered =
            flatten_occurrences(&roots, |o| tree.children_of(o), TraversalOptions::recursive());
        assert_eq!(components(&unfiltered), vec!["lib", "screw", "own"]);
    }

    #[test]
    fn test_broken_link_still_descends() {
        let mut tree = FakeTree::new();
        tree.add("Ghost:1", occ("B:1", "b", "Ghost:1+B:1"));

        let roots = vec![Occurrence::new("Ghost:1", None, "Ghost:1")];
        let records =
            flatten_occurrences(&roots, |o| tree.children_of(o), TraversalOptions::recursive());

        assert_eq!(components(&records), vec!["b"]);
    }

    #[test]
    fn test_n_distinct_components_yield_n_records() {
        // 5 distinct components, each placed 3 times at top level and below "Hub"
        let mut tree = FakeTree::new();
        let names = ["p0", "p1", "p2", "p3", "p4"];
        let mut roots = vec![occ("Hub:1", "hub", "Hub:1")];
        for round in 0..3 {
            for name in names {
                let occ_name = format!("{name}:{round}");
                roots.push(occ(&occ_name, name, &occ_name));
                tree.add(
                    "Hub:1",
                    occ(&occ_name, name, &format!("Hub:1+{occ_name}")),
                );
            }
        }

        let records =
            flatten_occurrences(&roots, |o| tree.children_of(o), TraversalOptions::recursive());

        assert_eq!(records.len(), 6);
        let unique: HashSet<_> = records.iter().map(|r| r.component.clone()).collect();
        assert_eq!(unique.len(), 6);
    }
}
