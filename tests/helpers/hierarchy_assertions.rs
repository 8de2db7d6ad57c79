//! Assertion helpers for edges and forests.

use std::collections::BTreeSet;

use classtree::{Forest, HierarchyReport, IdentPath, ResolvedEdge};

/// Edges of a report as `(child, parent)` dotted strings.
pub fn edge_set(report: &HierarchyReport) -> BTreeSet<(String, String)> {
    report
        .edges()
        .iter()
        .map(|edge| (edge.child.to_dotted(), edge.parent.to_dotted()))
        .collect()
}

/// Build the expected edge set from `child -> parent` pairs.
pub fn expected_edges(pairs: &[(&str, &str)]) -> BTreeSet<(String, String)> {
    pairs
        .iter()
        .map(|(child, parent)| (child.to_string(), parent.to_string()))
        .collect()
}

pub fn edge(child: &str, parent: &str) -> ResolvedEdge {
    ResolvedEdge::new(IdentPath::from_dotted(child), IdentPath::from_dotted(parent))
}

pub fn root_labels(forest: &Forest) -> Vec<String> {
    forest
        .roots()
        .iter()
        .map(|&id| forest.label(id).to_string())
        .collect()
}

pub fn child_labels(forest: &Forest, label: &str) -> Vec<String> {
    let id = forest
        .find(label)
        .unwrap_or_else(|| panic!("no forest node labelled {label}"));
    forest
        .children(id)
        .iter()
        .map(|&child| forest.label(child).to_string())
        .collect()
}

/// Every node is reachable from exactly one root.
pub fn assert_forest_partition(forest: &Forest) {
    let mut seen = BTreeSet::new();
    for (_, id) in forest.depth_first() {
        assert!(seen.insert(id), "{} visited twice", forest.label(id));
    }
    assert_eq!(seen.len(), forest.len(), "some nodes are unreachable from roots");
}
