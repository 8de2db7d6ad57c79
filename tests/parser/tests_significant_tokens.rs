//! Token filtering ahead of the header grammar

use classtree::parser::{SyntaxKind, significant_tokens, tokenize};

fn kinds(source: &str) -> Vec<SyntaxKind> {
    significant_tokens(source).iter().map(|t| t.kind).collect()
}

#[test]
fn test_lexer_is_lossless() {
    let source = "package a; // note\n/* block */ class X extends \"s\" {}";
    let rebuilt: String = tokenize(source).iter().map(|t| t.text).collect();
    assert_eq!(rebuilt, source);
}

#[test]
fn test_trivia_and_literals_are_dropped() {
    assert_eq!(
        kinds("/* class */ 'c' \"interface\" // enum\nclass"),
        vec![SyntaxKind::CLASS_KW]
    );
}

#[test]
fn test_keyword_prefix_is_an_identifier() {
    let tokens = significant_tokens("classes extendsX");
    assert!(tokens.iter().all(|t| t.kind == SyntaxKind::IDENT));
    assert_eq!(tokens[0].text, "classes");
}

#[test]
fn test_annotation_usage_is_skipped_to_end_of_line() {
    assert_eq!(
        kinds("@Generated(value = \"x\")\nclass"),
        vec![SyntaxKind::CLASS_KW]
    );
}

#[test]
fn test_at_interface_is_fused() {
    let tokens = significant_tokens("@  interface Marker");
    assert_eq!(tokens[0].kind, SyntaxKind::AT_INTERFACE_KW);
    assert_eq!(tokens[0].text, "@  interface");
    assert_eq!(tokens[1].kind, SyntaxKind::IDENT);
}

#[test]
fn test_at_interface_prefixed_name_is_an_annotation() {
    assert_eq!(kinds("@interfaceLike\nenum"), vec![SyntaxKind::ENUM_KW]);
}

#[test]
fn test_token_offsets() {
    let tokens = significant_tokens("package  a;");
    let offsets: Vec<u32> = tokens.iter().map(|t| t.offset.into()).collect();
    assert_eq!(offsets, vec![0, 9, 10]);
}
