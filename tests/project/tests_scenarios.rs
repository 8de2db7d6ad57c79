//! End-to-end analysis of in-memory corpora

use classtree::{
    AnalysisOptions, FileOutcome, IdentPath, ParseErrorKind, SkipReason, TypeKind, analyze,
};

use crate::helpers::hierarchy_assertions::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_two_package_corpus() {
    let report = analyze(TWO_PACKAGE_CORPUS.iter().copied(), &AnalysisOptions::default());

    assert_eq!(report.parsed_count(), 7);
    assert_eq!(report.skipped().count(), 0);
    assert_eq!(
        edge_set(&report),
        expected_edges(&[
            ("stuff.B", "stuff.A"),
            ("stuff2.A", "stuff.A"),
            ("stuff2.AA", "stuff2.A"),
            ("stuff2.B", "stuff.B"),
        ])
    );

    let forest = report.forest();
    assert_eq!(root_labels(forest), vec!["stuff.A", "stuff.C", "stuff.D"]);
    assert_eq!(child_labels(forest, "stuff.A"), vec!["stuff.B", "stuff2.A"]);
    assert_forest_partition(forest);
}

#[test]
fn test_sequential_parse_matches_parallel() {
    let parallel = analyze(TWO_PACKAGE_CORPUS.iter().copied(), &AnalysisOptions::default());
    let sequential = analyze(
        TWO_PACKAGE_CORPUS.iter().copied(),
        &AnalysisOptions::default().with_parallel_parse(false),
    );

    assert_eq!(parallel.files(), sequential.files());
    assert_eq!(parallel.edges(), sequential.edges());
    assert_eq!(root_labels(parallel.forest()), root_labels(sequential.forest()));
}

#[test]
fn test_file_without_package_clause() {
    let sources = vec![
        ("Standalone.java", NO_PACKAGE),
        ("Child.java", "public class Child extends Standalone {}"),
    ];
    let report = analyze(sources, &AnalysisOptions::default());

    assert_eq!(
        report.outcome("Standalone.java"),
        Some(&FileOutcome::Parsed {
            identity: IdentPath::from_dotted("default.Standalone"),
        })
    );
    assert_eq!(
        edge_set(&report),
        expected_edges(&[("default.Child", "default.Standalone")])
    );
}

#[test]
fn test_unparseable_file_is_skipped_and_run_continues() {
    let sources = vec![
        ("stuff/A.java", STUFF_A),
        ("Notes.java", COMMENTS_ONLY),
        ("stuff/B.java", STUFF_B),
    ];
    let report = analyze(sources, &AnalysisOptions::default());

    let skipped: Vec<_> = report.skipped().collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].0, "Notes.java");
    assert!(matches!(
        skipped[0].1,
        SkipReason::Parse(error) if error.kind == ParseErrorKind::MissingTypeDeclaration
    ));
    assert_eq!(edge_set(&report), expected_edges(&[("stuff.B", "stuff.A")]));
}

#[test]
fn test_type_without_extends_is_a_root() {
    let sources = vec![("Lonely.java", "package solo; public final class Lonely {}")];
    let report = analyze(sources, &AnalysisOptions::default());

    assert!(report.edges().is_empty());
    assert_eq!(root_labels(report.forest()), vec!["solo.Lonely"]);
}

#[test]
fn test_unresolved_supertype_leaves_a_root() {
    let sources = vec![("Frame.java", "package ui; class Frame extends javax.swing.JFrame {}")];
    let report = analyze(sources, &AnalysisOptions::default());

    assert!(report.edges().is_empty());
    assert_eq!(root_labels(report.forest()), vec!["ui.Frame"]);
}

#[test]
fn test_implements_does_not_create_edges() {
    let sources = vec![
        ("Task.java", "package p; public interface Task {}"),
        ("Job.java", "package p; public class Job implements Task {}"),
    ];
    let report = analyze(sources, &AnalysisOptions::default());

    assert!(report.edges().is_empty());
    let job = report.fact(&IdentPath::from_dotted("p.Job")).unwrap();
    assert_eq!(job.implements, vec![IdentPath::from_dotted("Task")]);
    assert_eq!(root_labels(report.forest()), vec!["p.Task", "p.Job"]);
}

#[test]
fn test_generic_headers_still_link() {
    let sources = vec![
        ("Base.java", "package p; public class Base {}"),
        (
            "Sub.java",
            "package p; public class Sub extends Base implements Comparable<Sub> {}",
        ),
        (
            "Box.java",
            "package p; public class Box<T extends Sub> extends Base {}",
        ),
    ];
    let report = analyze(sources, &AnalysisOptions::default());

    assert_eq!(report.skipped().count(), 0);
    assert_eq!(
        edge_set(&report),
        expected_edges(&[("p.Sub", "p.Base"), ("p.Box", "p.Base")])
    );
    assert_eq!(child_labels(report.forest(), "p.Base"), vec!["p.Sub", "p.Box"]);
}

#[test]
fn test_mixed_kinds_share_one_forest() {
    let sources = vec![
        ("Shape.java", "package g; public interface Shape {}"),
        ("Solid.java", "package g; public interface Solid extends Shape, Comparable {}"),
        ("Color.java", "package g; enum Color implements Shape { RED }"),
        ("Tag.java", "package g; @interface Tag {}"),
    ];
    let report = analyze(sources, &AnalysisOptions::default());

    assert_eq!(
        report
            .fact(&IdentPath::from_dotted("g.Tag"))
            .map(|fact| fact.kind),
        Some(TypeKind::AnnotationType)
    );
    assert_eq!(edge_set(&report), expected_edges(&[("g.Solid", "g.Shape")]));
    assert_eq!(root_labels(report.forest()), vec!["g.Shape", "g.Color", "g.Tag"]);
}

#[test]
fn test_empty_input() {
    let report = analyze(Vec::<(String, String)>::new(), &AnalysisOptions::default());
    assert!(report.files().is_empty());
    assert!(report.forest().is_empty());
    assert!(report.tree().is_empty());
}
