//! Reference Resolver - turns `extends` references into resolved edges.
//!
//! Each fact is resolved against its own import scope:
//!
//! 1. the declaring package (always first),
//! 2. then every import in source order: a single-type import contributes the
//!    imported node, an on-demand import contributes every type node directly
//!    under the named package.
//!
//! A bare name `N` is qualified against the declaring package (`package.N`)
//! and looked up there first; import entries match it by simple name. A
//! dotted reference is taken as absolute. The first entry that reaches a type
//! node wins. A type can never be its own supertype, so a match on the
//! declaring type itself is skipped (this is what lets `class B extends B`
//! with `import other.*` reach `other.B`).

use tracing::trace;

use super::namespace_tree::{NamespaceTree, NodeId};
use crate::base::IdentPath;
use crate::syntax::{ImportSpec, StructuralFact};

/// A resolved `child extends parent` relationship between two type identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedEdge {
    pub child: IdentPath,
    pub parent: IdentPath,
}

impl ResolvedEdge {
    pub fn new(child: IdentPath, parent: IdentPath) -> Self {
        Self { child, parent }
    }
}

/// Outcome of resolving a single reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Found(NodeId),
    NotFound,
}

impl Resolution {
    pub fn node(self) -> Option<NodeId> {
        match self {
            Resolution::Found(node) => Some(node),
            Resolution::NotFound => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

/// One context consulted while resolving a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeEntry {
    /// The declaring file's package node.
    Package(NodeId),
    /// A node brought in by an import (a single-type import, or one type of an
    /// on-demand import).
    Imported(NodeId),
}

/// Ordered resolution scope of one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportScope {
    entries: Vec<ScopeEntry>,
}

impl ImportScope {
    pub fn entries(&self) -> &[ScopeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves references against a fully populated [`NamespaceTree`].
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    tree: &'a NamespaceTree,
}

impl<'a> Resolver<'a> {
    pub fn new(tree: &'a NamespaceTree) -> Self {
        Self { tree }
    }

    /// Build the ordered scope for `fact`.
    pub fn import_scope(&self, fact: &StructuralFact) -> ImportScope {
        let mut entries = Vec::with_capacity(fact.imports.len() + 1);

        if let Some(package) = self.tree.lookup(&fact.package) {
            entries.push(ScopeEntry::Package(package));
        }

        for import in &fact.imports {
            match import {
                ImportSpec::OnDemand(package) => {
                    if let Some(package) = self.tree.lookup(package) {
                        entries.extend(self.tree.type_children(package).map(ScopeEntry::Imported));
                    } else {
                        trace!("on-demand import {} names no known package", import);
                    }
                }
                ImportSpec::Single(path) => match self.tree.lookup(path) {
                    Some(node) => entries.push(ScopeEntry::Imported(node)),
                    None => trace!("import {} is not part of the corpus", import),
                },
            }
        }

        ImportScope { entries }
    }

    /// Resolve `reference` as written in the file that produced `fact`.
    pub fn resolve_reference(&self, fact: &StructuralFact, reference: &IdentPath) -> Resolution {
        if reference.is_empty() {
            return Resolution::NotFound;
        }

        let declaring = self.tree.lookup(&fact.identity());
        let qualified = if reference.is_simple() {
            fact.package.join(reference)
        } else {
            reference.clone()
        };
        let accept = |candidate: Option<NodeId>| {
            candidate.filter(|&node| self.tree.is_type(node) && Some(node) != declaring)
        };

        for entry in self.import_scope(fact).entries() {
            let candidate = match *entry {
                ScopeEntry::Package(package) => qualified
                    .strip_prefix(&fact.package)
                    .and_then(|rest| self.tree.navigate(package, rest)),
                ScopeEntry::Imported(node) => self.match_imported(node, reference),
            };
            if let Some(found) = accept(candidate) {
                trace!(
                    "resolved {} in {} via {:?} -> {}",
                    reference,
                    fact.identity(),
                    entry,
                    self.tree.path(found)
                );
                return Resolution::Found(found);
            }
        }

        // A dotted reference is absolute and needs no import.
        if !reference.is_simple() {
            if let Some(found) = accept(self.tree.lookup(reference)) {
                return Resolution::Found(found);
            }
        }

        trace!("{} in {} did not resolve", reference, fact.identity());
        Resolution::NotFound
    }

    /// An imported node answers to its simple name; any further segments are
    /// looked up beneath it.
    fn match_imported(&self, node: NodeId, reference: &IdentPath) -> Option<NodeId> {
        let (first, rest) = reference.segments().split_first()?;
        if self.tree.name(node) != first.as_str() {
            return None;
        }
        self.tree.navigate(node, rest)
    }

    /// Resolve the first `extends` reference of `fact`, if any.
    pub fn resolve_fact(&self, fact: &StructuralFact) -> Option<ResolvedEdge> {
        let reference = fact.primary_extends()?;
        let parent = self.resolve_reference(fact, reference).node()?;
        Some(ResolvedEdge::new(fact.identity(), self.tree.path(parent)))
    }

    /// Resolve every fact, keeping fact order. Unresolved facts are omitted.
    pub fn resolve_all<'f, I>(&self, facts: I) -> Vec<ResolvedEdge>
    where
        I: IntoIterator<Item = &'f StructuralFact>,
    {
        facts
            .into_iter()
            .filter_map(|fact| self.resolve_fact(fact))
            .collect()
    }
}

/// Resolve all facts against `tree`.
pub fn resolve_edges<'f, I>(tree: &NamespaceTree, facts: I) -> Vec<ResolvedEdge>
where
    I: IntoIterator<Item = &'f StructuralFact>,
{
    Resolver::new(tree).resolve_all(facts)
}
