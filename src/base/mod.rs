//! Foundation types for the classtree toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`IdentPath`] - Dotted identifier paths (`com.acme.Base`)
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion for diagnostics
//!
//! This module has NO dependencies on other classtree modules.

mod path;
mod span;

pub use path::{DEFAULT_PACKAGE, IdentPath};
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
