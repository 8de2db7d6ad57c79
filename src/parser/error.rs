//! Header parse errors.
//!
//! A parse failure is an expected per-file outcome: the caller logs it and
//! skips the file.

use smol_str::SmolStr;
use text_size::TextRange;
use thiserror::Error;

use crate::base::LineIndex;
use crate::syntax::TypeKind;

/// What went wrong while matching the header grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
    },

    /// The file has no top-level type declaration (empty, comments only, ...).
    #[error("no type declaration found")]
    MissingTypeDeclaration,

    #[error("`{clause}` clause is not allowed on {kind} declarations")]
    InvalidClause {
        kind: TypeKind,
        clause: &'static str,
    },

    #[error("a class may extend only one type")]
    MultipleSuperclasses,

    /// An identifier token that does not start like an identifier (`2Fast`).
    #[error("`{0}` is not a valid identifier")]
    InvalidIdentifier(SmolStr),
}

/// A parse failure with the range of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub range: TextRange,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    /// Render the error with a 1-indexed `line:col` prefix for `text`.
    pub fn describe(&self, text: &str) -> String {
        let position = LineIndex::new(text).line_col(self.range.start());
        format!("{position}: {}", self.kind)
    }
}
