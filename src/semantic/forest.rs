//! Forest Assembler - builds labelled trees from resolved edges.
//!
//! Nodes are keyed by the dot-joined identity of a type; each distinct label
//! gets exactly one node. A node is a root iff no accepted edge names it as a
//! child. Rendering is left to the caller.

use indexmap::{IndexMap, IndexSet};
use tracing::warn;

use super::resolver::ResolvedEdge;

/// Index of a node in a [`Forest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ForestNodeId(usize);

impl ForestNodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestNode {
    label: String,
    parent: Option<ForestNodeId>,
    children: Vec<ForestNodeId>,
}

impl ForestNode {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn parent(&self) -> Option<ForestNodeId> {
        self.parent
    }

    pub fn children(&self) -> &[ForestNodeId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Collects labels and `child -> parent` links before building a [`Forest`].
#[derive(Debug, Clone, Default)]
pub struct ForestBuilder {
    /// Every label in first-seen order
    labels: IndexSet<String>,
    /// child label -> parent label; a later edge for the same child replaces the earlier one
    parents: IndexMap<String, String>,
}

impl ForestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `label` has a node even if no edge mentions it.
    pub fn add_root_candidate(&mut self, label: impl Into<String>) -> &mut Self {
        self.labels.insert(label.into());
        self
    }

    pub fn add_edge(&mut self, edge: &ResolvedEdge) -> &mut Self {
        let parent = edge.parent.to_dotted();
        let child = edge.child.to_dotted();
        self.labels.insert(parent.clone());
        self.labels.insert(child.clone());
        self.parents.insert(child, parent);
        self
    }

    /// Link every recorded edge. An edge that would make a node its own
    /// ancestor is dropped and its child stays a root.
    pub fn build(self) -> Forest {
        let mut nodes: Vec<ForestNode> = self
            .labels
            .iter()
            .map(|label| ForestNode {
                label: label.clone(),
                parent: None,
                children: Vec::new(),
            })
            .collect();

        for (child_label, parent_label) in &self.parents {
            let (Some(child), Some(parent)) = (
                self.labels.get_index_of(child_label),
                self.labels.get_index_of(parent_label),
            ) else {
                continue;
            };

            if is_ancestor_or_self(&nodes, child, parent) {
                warn!(
                    "dropping inheritance edge {} -> {}: it would close a cycle",
                    child_label, parent_label
                );
                continue;
            }

            nodes[child].parent = Some(ForestNodeId(parent));
            nodes[parent].children.push(ForestNodeId(child));
        }

        let roots = nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_root())
            .map(|(index, _)| ForestNodeId(index))
            .collect();

        Forest {
            nodes,
            index: self.labels,
            roots,
        }
    }
}

/// True if `ancestor` is `node` or appears on `node`'s parent chain.
fn is_ancestor_or_self(nodes: &[ForestNode], ancestor: usize, node: usize) -> bool {
    let mut current = Some(node);
    while let Some(index) = current {
        if index == ancestor {
            return true;
        }
        current = nodes[index].parent.map(ForestNodeId::index);
    }
    false
}

/// A set of labelled trees.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    nodes: Vec<ForestNode>,
    index: IndexSet<String>,
    roots: Vec<ForestNodeId>,
}

impl Forest {
    /// Assemble a forest from `edges` alone: only labels that appear in some
    /// edge get a node.
    pub fn assemble<'e, I>(edges: I) -> Forest
    where
        I: IntoIterator<Item = &'e ResolvedEdge>,
    {
        let mut builder = ForestBuilder::new();
        for edge in edges {
            builder.add_edge(edge);
        }
        builder.build()
    }

    /// Roots in first-seen order.
    pub fn roots(&self) -> &[ForestNodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// # Panics
    /// If `id` was not issued by this forest.
    pub fn node(&self, id: ForestNodeId) -> &ForestNode {
        &self.nodes[id.0]
    }

    pub fn label(&self, id: ForestNodeId) -> &str {
        self.node(id).label()
    }

    pub fn children(&self, id: ForestNodeId) -> &[ForestNodeId] {
        self.node(id).children()
    }

    pub fn parent(&self, id: ForestNodeId) -> Option<ForestNodeId> {
        self.node(id).parent()
    }

    pub fn find(&self, label: &str) -> Option<ForestNodeId> {
        self.index.get_index_of(label).map(ForestNodeId)
    }

    /// All nodes in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (ForestNodeId, &ForestNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (ForestNodeId(index), node))
    }

    /// Every root's tree in pre-order, paired with the depth (roots are 0).
    pub fn depth_first(&self) -> Vec<(usize, ForestNodeId)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(usize, ForestNodeId)> =
            self.roots.iter().rev().map(|&root| (0, root)).collect();

        while let Some((depth, id)) = stack.pop() {
            out.push((depth, id));
            stack.extend(self.children(id).iter().rev().map(|&child| (depth + 1, child)));
        }
        out
    }

    /// The root of the tree containing `id`.
    pub fn root_of(&self, id: ForestNodeId) -> ForestNodeId {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }
}
