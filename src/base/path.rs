//! Identifier paths.
//!
//! An [`IdentPath`] is the unit of identity for packages and types: an
//! ordered list of name segments compared case-sensitively. Paths are
//! immutable once built; every "modifying" operation returns a new path.

use smol_str::SmolStr;
use std::fmt;

/// Package segment assigned to files without a `package` clause.
pub const DEFAULT_PACKAGE: &str = "default";

/// An ordered sequence of name segments, e.g. `["com", "acme", "Base"]`.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdentPath {
    segments: Vec<SmolStr>,
}

impl IdentPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The empty path (the Namespace Tree root).
    pub fn root() -> Self {
        Self::default()
    }

    /// The `["default"]` package path.
    pub fn default_package() -> Self {
        Self::new([DEFAULT_PACKAGE])
    }

    /// Split a dotted string (`a.b.C`) into a path. Empty input yields the root path.
    pub fn from_dotted(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::root();
        }
        Self::new(dotted.split('.'))
    }

    pub fn segments(&self) -> &[SmolStr] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.segments.first().map(SmolStr::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(SmolStr::as_str)
    }

    /// True if this path is a single bare segment (an unqualified name).
    pub fn is_simple(&self) -> bool {
        self.segments.len() == 1
    }

    pub fn starts_with(&self, prefix: &IdentPath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// The remaining segments after `prefix`, or `None` if `prefix` does not match.
    pub fn strip_prefix(&self, prefix: &IdentPath) -> Option<&[SmolStr]> {
        self.segments.strip_prefix(prefix.segments.as_slice())
    }

    /// Concatenate two paths.
    pub fn join(&self, other: &IdentPath) -> IdentPath {
        let mut segments = Vec::with_capacity(self.len() + other.len());
        segments.extend_from_slice(&self.segments);
        segments.extend_from_slice(&other.segments);
        IdentPath { segments }
    }

    /// Append one segment.
    pub fn child(&self, segment: impl Into<SmolStr>) -> IdentPath {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        IdentPath { segments }
    }

    /// The path without its last segment; the root path has no parent.
    pub fn parent(&self) -> Option<IdentPath> {
        let (_, init) = self.segments.split_last()?;
        Some(IdentPath {
            segments: init.to_vec(),
        })
    }

    /// Dot-joined string form, used as the forest label.
    pub fn to_dotted(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for IdentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dotted())
    }
}

impl fmt::Debug for IdentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentPath({})", self.to_dotted())
    }
}

impl<S: Into<SmolStr>> FromIterator<S> for IdentPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<&[SmolStr]> for IdentPath {
    fn from(segments: &[SmolStr]) -> Self {
        Self {
            segments: segments.to_vec(),
        }
    }
}
