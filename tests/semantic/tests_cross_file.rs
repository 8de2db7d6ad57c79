//! Cross-file resolution over parsed facts

use classtree::semantic::{NamespaceTree, Resolution, Resolver, resolve_edges};
use classtree::{IdentPath, StructuralFact, parse_header};

use crate::helpers::hierarchy_assertions::edge;
use crate::helpers::source_fixtures::*;

fn parse_all(sources: &[&str]) -> Vec<StructuralFact> {
    sources
        .iter()
        .map(|source| parse_header(source).unwrap())
        .collect()
}

fn tree_of(facts: &[StructuralFact]) -> NamespaceTree {
    let mut tree = NamespaceTree::new();
    for fact in facts {
        tree.insert_fact(fact.clone());
    }
    tree
}

fn corpus_facts() -> Vec<StructuralFact> {
    let sources: Vec<&str> = TWO_PACKAGE_CORPUS.iter().map(|(_, source)| *source).collect();
    parse_all(&sources)
}

#[test]
fn test_two_package_corpus_edges() {
    let facts = corpus_facts();
    let tree = tree_of(&facts);

    assert_eq!(
        resolve_edges(&tree, &facts),
        vec![
            edge("stuff.B", "stuff.A"),
            edge("stuff2.AA", "stuff2.A"),
            edge("stuff2.A", "stuff.A"),
            edge("stuff2.B", "stuff.B"),
        ]
    );
}

#[test]
fn test_tree_shape_after_insertion() {
    let facts = corpus_facts();
    let tree = tree_of(&facts);

    let stuff = tree.lookup(&IdentPath::from_dotted("stuff")).unwrap();
    let stuff2 = tree.lookup(&IdentPath::from_dotted("stuff2")).unwrap();
    assert_eq!(tree.children(tree.root()), &[stuff, stuff2]);

    let names: Vec<_> = tree.type_children(stuff2).map(|id| tree.name(id)).collect();
    assert_eq!(names, vec!["AA", "A", "B"]);
    assert_eq!(tree.type_nodes().count(), 7);
}

#[test]
fn test_wildcard_scope_lists_package_types() {
    let facts = corpus_facts();
    let tree = tree_of(&facts);
    let stuff2_b = facts
        .iter()
        .find(|fact| fact.identity() == IdentPath::from_dotted("stuff2.B"))
        .unwrap();

    // own package + the four types of `stuff`
    let scope = Resolver::new(&tree).import_scope(stuff2_b);
    assert_eq!(scope.len(), 5);
}

#[test]
fn test_reference_resolution_outcomes() {
    let facts = corpus_facts();
    let tree = tree_of(&facts);
    let resolver = Resolver::new(&tree);
    let stuff2_aa = &facts[4];

    let found = resolver.resolve_reference(stuff2_aa, &IdentPath::from_dotted("A"));
    assert_eq!(
        found.node().map(|id| tree.path(id)),
        Some(IdentPath::from_dotted("stuff2.A"))
    );

    let absolute = resolver.resolve_reference(stuff2_aa, &IdentPath::from_dotted("stuff.C"));
    assert!(absolute.is_found());

    // `C` lives in `stuff`, which stuff2.AA does not import
    assert_eq!(
        resolver.resolve_reference(stuff2_aa, &IdentPath::from_dotted("C")),
        Resolution::NotFound
    );
}

#[test]
fn test_external_supertypes_do_not_resolve() {
    let facts = parse_all(&[
        "package app; import javax.swing.JPanel; class Panel extends JPanel {}",
        "package app; class Thread2 extends java.lang.Thread {}",
    ]);
    let tree = tree_of(&facts);
    assert!(resolve_edges(&tree, &facts).is_empty());
}

#[test]
fn test_default_package_types_resolve_each_other() {
    let facts = parse_all(&["class Base {}", "class Sub extends Base {}"]);
    let tree = tree_of(&facts);
    assert_eq!(
        resolve_edges(&tree, &facts),
        vec![edge("default.Sub", "default.Base")]
    );
}

#[test]
fn test_nested_package_reference_via_import() {
    let facts = parse_all(&[
        "package com.acme.core; public class Entity {}",
        "package com.acme.app; import com.acme.core.Entity; class User extends Entity {}",
        "package com.acme.app; import com.acme.core.*; class Order extends Entity {}",
    ]);
    let tree = tree_of(&facts);
    assert_eq!(
        resolve_edges(&tree, &facts),
        vec![
            edge("com.acme.app.User", "com.acme.core.Entity"),
            edge("com.acme.app.Order", "com.acme.core.Entity"),
        ]
    );
}
