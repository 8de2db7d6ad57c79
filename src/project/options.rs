//! Analysis options

/// What to do when two files declare the same fully-qualified type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The later file replaces the earlier one in the tree and the fact list.
    #[default]
    LastWriteWins,
    /// The first file is kept; every later one is skipped.
    Reject,
}

/// Options for a hierarchy analysis run
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// How duplicate type identities are handled
    pub duplicate_policy: DuplicatePolicy,
    /// Seed every parsed type into the forest so types without a resolved
    /// supertype show up as roots
    pub include_isolated_types: bool,
    /// Parse files on the rayon thread pool
    pub parallel_parse: bool,
    /// File extension (without the dot) picked up when loading a directory
    pub source_extension: String,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            include_isolated_types: true,
            parallel_parse: true,
            source_extension: "java".to_string(),
        }
    }
}

impl AnalysisOptions {
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn with_parallel_parse(mut self, parallel: bool) -> Self {
        self.parallel_parse = parallel;
        self
    }

    pub fn with_isolated_types(mut self, include: bool) -> Self {
        self.include_isolated_types = include;
        self
    }

    pub fn with_source_extension(mut self, extension: impl Into<String>) -> Self {
        self.source_extension = extension.into();
        self
    }
}
