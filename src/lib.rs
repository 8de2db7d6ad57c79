//! # classtree-base
//!
//! Core library for reconstructing the inheritance hierarchy of a corpus of
//! Java-like source files.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Source loading, analysis options, end-to-end pipeline
//!   ↓
//! semantic  → Namespace Tree, Reference Resolver, Forest Assembler
//!   ↓
//! syntax    → StructuralFact, TypeKind, Modifier, ImportSpec
//!   ↓
//! parser    → Logos lexer, recursive-descent header parser, ParseError
//!   ↓
//! base      → Primitives (IdentPath, LineIndex, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → semantic → project)
// ============================================================================

/// Foundation types: IdentPath, LineIndex, TextRange
pub mod base;

/// Parser: Logos lexer, recursive-descent header parser
pub mod parser;

/// Syntax: per-file structural facts
pub mod syntax;

/// Semantic: namespace tree, reference resolution, forest assembly
pub mod semantic;

/// Project: source loading and the analysis pipeline
pub mod project;

// Re-export commonly needed items
pub use parser::keywords;

// Re-export foundation types
pub use base::{DEFAULT_PACKAGE, IdentPath, LineCol, LineIndex, TextRange, TextSize};

pub use parser::{HeaderParser, ParseError, ParseErrorKind, parse_header};
pub use project::{
    AnalysisOptions, DuplicatePolicy, FileOutcome, HierarchyReport, LoadError, SkipReason,
    SourceLoader, analyze, analyze_directory,
};
pub use semantic::{Forest, ForestBuilder, NamespaceTree, NodeId, ResolvedEdge, Resolver};
pub use syntax::{ImportSpec, Modifier, StructuralFact, TypeKind};
