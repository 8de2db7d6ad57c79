//! Project-level entry points: loading a source tree and running the
//! analysis pipeline over it.

mod analysis;
mod error;
pub mod loader;
mod options;

pub use analysis::{
    FileOutcome, FileReport, HierarchyReport, SkipReason, analyze, analyze_directory,
};
pub use error::LoadError;
pub use loader::{SourceFile, SourceLoader, load_file};
pub use options::{AnalysisOptions, DuplicatePolicy};
