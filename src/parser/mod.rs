//! Structural parser for Java-like source files
//!
//! Extracts just enough of a file to place its top-level type in the
//! hierarchy: the package clause, the import clauses and the type declaration
//! header. Method bodies, generics and nested types are out of scope.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind (lossless, trivia included)
//!     ↓
//! significant_tokens → drops trivia, string/char literals, annotation usages
//!     ↓
//! HeaderParser (recursive descent) → StructuralFact | ParseError
//! ```

#[allow(clippy::module_inception)]
mod parser;

mod error;
pub mod keywords;
mod lexer;
mod syntax_kind;

pub use error::{ParseError, ParseErrorKind};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{HeaderParser, parse_header, significant_tokens};
pub use syntax_kind::SyntaxKind;
