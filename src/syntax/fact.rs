//! Structural facts extracted from one source file.
//!
//! All type kinds share one record shape: downstream resolution and forest
//! assembly treat classes, interfaces, enums and annotation types alike.

use std::collections::BTreeSet;
use std::fmt;

use smol_str::SmolStr;

use crate::base::IdentPath;

/// The declared kind of a top-level type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    /// `@interface`
    AnnotationType,
}

impl TypeKind {
    /// Source keyword for this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::AnnotationType => "@interface",
        }
    }

    /// Whether an `extends` clause may list more than one supertype.
    pub fn allows_multiple_extends(self) -> bool {
        matches!(self, Self::Interface)
    }

    /// Whether the kind accepts an `extends` clause at all.
    pub fn allows_extends(self) -> bool {
        matches!(self, Self::Class | Self::Interface)
    }

    /// Whether the kind accepts an `implements` clause.
    pub fn allows_implements(self) -> bool {
        matches!(self, Self::Class | Self::Enum)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Declaration modifiers. Informational only; resolution ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Public,
    Abstract,
    Final,
}

impl Modifier {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Abstract => "abstract",
            Self::Final => "final",
        }
    }
}

/// Ordered set of modifiers; repeats collapse.
pub type Modifiers = BTreeSet<Modifier>;

/// One `import` clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImportSpec {
    /// `import a.b.C;`
    Single(IdentPath),
    /// `import a.b.*;` - the path is the package, without the wildcard.
    OnDemand(IdentPath),
}

impl ImportSpec {
    pub fn path(&self) -> &IdentPath {
        match self {
            Self::Single(path) | Self::OnDemand(path) => path,
        }
    }

    pub fn is_on_demand(&self) -> bool {
        matches!(self, Self::OnDemand(_))
    }
}

impl fmt::Display for ImportSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(path) => write!(f, "{path}"),
            Self::OnDemand(path) => write!(f, "{path}.*"),
        }
    }
}

/// Everything the hierarchy needs to know about one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralFact {
    /// Declared package, or `["default"]` when the file has no package clause.
    pub package: IdentPath,
    /// Imports in source order.
    pub imports: Vec<ImportSpec>,
    pub kind: TypeKind,
    pub modifiers: Modifiers,
    /// Simple type name.
    pub name: SmolStr,
    /// Supertype references as written. Only interfaces may have several.
    pub extends: Vec<IdentPath>,
    /// Captured for completeness; not resolved into the hierarchy.
    pub implements: Vec<IdentPath>,
}

impl StructuralFact {
    /// Fully-qualified identity: `package + [name]`.
    pub fn identity(&self) -> IdentPath {
        self.package.child(self.name.clone())
    }

    /// The supertype reference that takes part in resolution.
    pub fn primary_extends(&self) -> Option<&IdentPath> {
        self.extends.first()
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}
