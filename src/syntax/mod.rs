//! Syntax-level data model: the structural facts a parsed file contributes.

mod fact;

pub use fact::{ImportSpec, Modifier, Modifiers, StructuralFact, TypeKind};
