//! Semantic layer tests
//!
//! Namespace tree population, cross-file reference resolution and forest
//! assembly over facts produced by the parser.

mod tests_cross_file;
