//! # Semantic Analysis
//!
//! Turns per-file structural facts into a corpus-wide inheritance forest:
//!
//! ```text
//! StructuralFact* → NamespaceTree (insert_fact)
//!                 → Resolver (import scope + qualification) → ResolvedEdge*
//!                 → ForestBuilder → Forest
//! ```
//!
//! Resolution only starts once every fact is in the tree; there is no
//! partial or streaming mode.

pub mod forest;
pub mod namespace_tree;
pub mod resolver;

pub use forest::{Forest, ForestBuilder, ForestNode, ForestNodeId};
pub use namespace_tree::{Inserted, NamespaceTree, Node, NodeId};
pub use resolver::{
    ImportScope, Resolution, ResolvedEdge, Resolver, ScopeEntry, resolve_edges,
};
