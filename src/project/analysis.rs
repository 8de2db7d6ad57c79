//! End-to-end hierarchy analysis.
//!
//! ```text
//! (name, text)* → HeaderParser (rayon, input order kept)
//!               → NamespaceTree + fact list (duplicate policy applied)
//!               → Resolver → ResolvedEdge*
//!               → ForestBuilder → Forest
//! ```
//!
//! A file that fails to parse is logged and skipped; it never aborts the run.

use std::path::Path;

use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::error::LoadError;
use super::loader::SourceLoader;
use super::options::{AnalysisOptions, DuplicatePolicy};
use crate::base::IdentPath;
use crate::parser::{HeaderParser, ParseError};
use crate::semantic::{Forest, ForestBuilder, NamespaceTree, ResolvedEdge, Resolver};
use crate::syntax::StructuralFact;

/// Why a file contributed nothing to the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Parse(ParseError),
    /// Another file declares the same type and its fact was kept instead.
    DuplicateIdentity { identity: IdentPath, kept: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Parsed { identity: IdentPath },
    Skipped { reason: SkipReason },
}

impl FileOutcome {
    pub fn is_parsed(&self) -> bool {
        matches!(self, FileOutcome::Parsed { .. })
    }

    pub fn identity(&self) -> Option<&IdentPath> {
        match self {
            FileOutcome::Parsed { identity } => Some(identity),
            FileOutcome::Skipped { .. } => None,
        }
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            FileOutcome::Parsed { .. } => None,
            FileOutcome::Skipped { reason } => Some(reason),
        }
    }
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub name: String,
    pub outcome: FileOutcome,
}

/// Everything one analysis run produced.
#[derive(Debug, Clone)]
pub struct HierarchyReport {
    files: Vec<FileReport>,
    facts: IndexMap<IdentPath, StructuralFact>,
    tree: NamespaceTree,
    edges: Vec<ResolvedEdge>,
    forest: Forest,
}

impl HierarchyReport {
    /// Per-file outcomes, in input order.
    pub fn files(&self) -> &[FileReport] {
        &self.files
    }

    pub fn outcome(&self, name: &str) -> Option<&FileOutcome> {
        self.files
            .iter()
            .find(|file| file.name == name)
            .map(|file| &file.outcome)
    }

    pub fn parsed_count(&self) -> usize {
        self.files.iter().filter(|file| file.outcome.is_parsed()).count()
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.files.iter().filter_map(|file| {
            file.outcome
                .skip_reason()
                .map(|reason| (file.name.as_str(), reason))
        })
    }

    /// Surviving facts keyed by identity, in first-seen order.
    pub fn facts(&self) -> &IndexMap<IdentPath, StructuralFact> {
        &self.facts
    }

    pub fn fact(&self, identity: &IdentPath) -> Option<&StructuralFact> {
        self.facts.get(identity)
    }

    pub fn tree(&self) -> &NamespaceTree {
        &self.tree
    }

    /// Resolved edges in fact order.
    pub fn edges(&self) -> &[ResolvedEdge] {
        &self.edges
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn into_forest(self) -> Forest {
        self.forest
    }
}

/// Run the whole pipeline over `(name, text)` pairs.
pub fn analyze<I, N, T>(sources: I, options: &AnalysisOptions) -> HierarchyReport
where
    I: IntoIterator<Item = (N, T)>,
    N: Into<String>,
    T: AsRef<str> + Sync,
{
    let sources: Vec<(String, T)> = sources
        .into_iter()
        .map(|(name, text)| (name.into(), text))
        .collect();

    let parser = HeaderParser::new();
    let parse_one = |(_, text): &(String, T)| parser.parse(text.as_ref());
    let parsed: Vec<Result<StructuralFact, ParseError>> = if options.parallel_parse {
        sources.par_iter().map(parse_one).collect()
    } else {
        sources.iter().map(parse_one).collect()
    };

    let mut files: Vec<FileReport> = Vec::with_capacity(sources.len());
    let mut facts: IndexMap<IdentPath, StructuralFact> = IndexMap::new();
    // identity -> index into `files` of the file that currently owns it
    let mut owners: IndexMap<IdentPath, usize> = IndexMap::new();
    let mut tree = NamespaceTree::new();

    for ((name, text), result) in sources.iter().zip(parsed) {
        let fact = match result {
            Ok(fact) => fact,
            Err(error) => {
                warn!("skipping {}: {}", name, error.describe(text.as_ref()));
                files.push(FileReport {
                    name: name.clone(),
                    outcome: FileOutcome::Skipped {
                        reason: SkipReason::Parse(error),
                    },
                });
                continue;
            }
        };

        let identity = fact.identity();
        if let Some(&previous) = owners.get(&identity) {
            let previous_name = files[previous].name.clone();
            match options.duplicate_policy {
                DuplicatePolicy::Reject => {
                    warn!(
                        "skipping {}: {} is already declared in {}",
                        name, identity, previous_name
                    );
                    files.push(FileReport {
                        name: name.clone(),
                        outcome: FileOutcome::Skipped {
                            reason: SkipReason::DuplicateIdentity {
                                identity,
                                kept: previous_name,
                            },
                        },
                    });
                    continue;
                }
                DuplicatePolicy::LastWriteWins => {
                    warn!("{} redeclares {} from {}", name, identity, previous_name);
                    files[previous].outcome = FileOutcome::Skipped {
                        reason: SkipReason::DuplicateIdentity {
                            identity: identity.clone(),
                            kept: name.clone(),
                        },
                    };
                }
            }
        }

        debug!("parsed {} as {} {}", name, fact.kind, identity);
        owners.insert(identity.clone(), files.len());
        tree.insert_fact(fact.clone());
        facts.insert(identity.clone(), fact);
        files.push(FileReport {
            name: name.clone(),
            outcome: FileOutcome::Parsed { identity },
        });
    }

    let edges = Resolver::new(&tree).resolve_all(facts.values());

    let mut builder = ForestBuilder::new();
    if options.include_isolated_types {
        for identity in facts.keys() {
            builder.add_root_candidate(identity.to_dotted());
        }
    }
    for edge in &edges {
        builder.add_edge(edge);
    }
    let forest = builder.build();

    let report = HierarchyReport {
        files,
        facts,
        tree,
        edges,
        forest,
    };
    info!(
        "analyzed {} file(s): {} parsed, {} skipped, {} edge(s), {} root(s)",
        report.files.len(),
        report.parsed_count(),
        report.files.len() - report.parsed_count(),
        report.edges.len(),
        report.forest.roots().len()
    );
    report
}

/// Load every source file below `root` and analyze it.
///
/// File names in the report are paths relative to `root`.
pub fn analyze_directory(
    root: &Path,
    options: &AnalysisOptions,
) -> Result<HierarchyReport, LoadError> {
    let files = SourceLoader::from_options(options).load(root)?;
    let sources = files.into_iter().map(|file| {
        let name = file
            .path
            .strip_prefix(root)
            .unwrap_or(&file.path)
            .display()
            .to_string();
        (name, file.text)
    });
    Ok(analyze(sources, options))
}
