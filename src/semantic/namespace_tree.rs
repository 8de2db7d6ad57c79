//! Namespace Tree - hierarchical index of packages and types.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. A parent owns
//! its children (by id); the parent link is only used to rebuild paths.
//! Package nodes carry no fact; type nodes carry the [`StructuralFact`] of the
//! file that declared them.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::IdentPath;
use crate::syntax::StructuralFact;

/// Index of a node in a [`NamespaceTree`]. Only meaningful for the tree that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    name: SmolStr,
    parent: Option<NodeId>,
    /// Children in insertion order
    children: Vec<NodeId>,
    /// Name -> child, for O(1) navigation
    child_index: FxHashMap<SmolStr, NodeId>,
    fact: Option<StructuralFact>,
}

impl Node {
    fn new(name: SmolStr, parent: Option<NodeId>) -> Self {
        Self {
            name,
            parent,
            children: Vec::new(),
            child_index: FxHashMap::default(),
            fact: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn fact(&self) -> Option<&StructuralFact> {
        self.fact.as_ref()
    }

    /// Type nodes are the ones with an attached fact.
    pub fn is_type(&self) -> bool {
        self.fact.is_some()
    }
}

/// Result of [`NamespaceTree::insert_fact`].
#[derive(Debug)]
pub struct Inserted {
    pub node: NodeId,
    /// The fact previously attached at the same identity, if any.
    pub replaced: Option<StructuralFact>,
}

#[derive(Debug, Clone)]
pub struct NamespaceTree {
    nodes: Vec<Node>,
}

impl Default for NamespaceTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceTree {
    /// Create a tree holding only the root (empty path).
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(SmolStr::default(), None)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree is never truly empty; this reports whether only the root exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Access a node by id.
    ///
    /// # Panics
    /// If `id` was not issued by this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn name(&self, id: NodeId) -> &str {
        self.node(id).name()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children()
    }

    pub fn fact(&self, id: NodeId) -> Option<&StructuralFact> {
        self.node(id).fact()
    }

    pub fn is_type(&self, id: NodeId) -> bool {
        self.node(id).is_type()
    }

    /// Direct children of `id` that are type nodes, in insertion order.
    pub fn type_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(|&child| self.is_type(child))
    }

    /// Every type node in the tree, in arena order.
    pub fn type_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|&id| self.is_type(id))
    }

    pub fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.node(parent).child_index.get(name).copied()
    }

    /// Follow `segments` down from `from`. Never creates nodes.
    ///
    /// An empty `segments` returns `from` itself, so navigating `[]` from the
    /// root yields `Some(root)` rather than "not found".
    pub fn navigate(&self, from: NodeId, segments: &[SmolStr]) -> Option<NodeId> {
        segments
            .iter()
            .try_fold(from, |current, segment| self.find_child(current, segment))
    }

    /// Navigate an absolute path from the root.
    pub fn lookup(&self, path: &IdentPath) -> Option<NodeId> {
        self.navigate(self.root(), path.segments())
    }

    /// Ensure every node along `segments` exists below `from`, creating the
    /// missing suffix. Idempotent; returns the last node.
    pub fn forge_path(&mut self, from: NodeId, segments: &[SmolStr]) -> NodeId {
        let mut current = from;
        for segment in segments {
            current = match self.find_child(current, segment) {
                Some(child) => child,
                None => self.add_child(current, segment.clone()),
            };
        }
        current
    }

    fn add_child(&mut self, parent: NodeId, name: SmolStr) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name.clone(), Some(parent)));
        let parent_node = &mut self.nodes[parent.0];
        parent_node.children.push(id);
        parent_node.child_index.insert(name, id);
        id
    }

    /// Attach `fact` at `fact.package + [fact.name]`, forging the package path.
    ///
    /// An existing node with that identity is reused and its fact overwritten
    /// (last insertion wins); the old fact is handed back in [`Inserted`].
    pub fn insert_fact(&mut self, fact: StructuralFact) -> Inserted {
        let package = self.forge_path(self.root(), fact.package.segments());
        let node = self.forge_path(package, std::slice::from_ref(&fact.name));
        let replaced = self.nodes[node.0].fact.replace(fact);
        Inserted { node, replaced }
    }

    /// Full path of `id`, rebuilt from parent links. The root's path is empty.
    pub fn path(&self, id: NodeId) -> IdentPath {
        let mut segments = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            segments.push(self.node(current).name.clone());
            current = parent;
        }
        segments.reverse();
        IdentPath::new(segments)
    }
}
