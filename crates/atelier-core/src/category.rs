//! Component categories and their destination directory prefixes

use std::fmt;

/// Atomic-design grouping a component belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Core,
    Atoms,
    Molecules,
    Organisms,
}

impl Category {
    /// All categories, in catalog display order
    pub const ALL: [Category; 4] = [
        Category::Core,
        Category::Atoms,
        Category::Molecules,
        Category::Organisms,
    ];

    /// Parse a category string, case-insensitively.
    ///
    /// Unrecognized values fall back to `Atoms`. Typos are swallowed rather
    /// than rejected; callers that want to surface the fallback should use
    /// [`Category::try_parse`] and warn on `None`.
    pub fn parse(s: &str) -> Category {
        Self::try_parse(s).unwrap_or(Category::Atoms)
    }

    /// Parse a category string, returning `None` when unrecognized
    pub fn try_parse(s: &str) -> Option<Category> {
        match s.to_lowercase().as_str() {
            "core" => Some(Category::Core),
            "atoms" | "atom" => Some(Category::Atoms),
            "molecules" | "molecule" => Some(Category::Molecules),
            "organisms" | "organism" => Some(Category::Organisms),
            _ => None,
        }
    }

    /// Lower-case key used in data paths and style lookups
    pub fn key(&self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::Atoms => "atoms",
            Category::Molecules => "molecules",
            Category::Organisms => "organisms",
        }
    }

    /// Numeric-prefixed include directory for this category
    pub fn dir_prefix(&self) -> &'static str {
        match self {
            Category::Core => "00-core",
            Category::Atoms => "01-atoms",
            Category::Molecules => "02-molecules",
            Category::Organisms => "03-organisms",
        }
    }

    /// Human-readable label used for story grouping
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Core => "Core",
            Category::Atoms => "Atoms",
            Category::Molecules => "Molecules",
            Category::Organisms => "Organisms",
        }
    }

    /// Resolve a category from its include directory name (e.g. "01-atoms")
    pub fn from_dir_prefix(dir: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.dir_prefix() == dir)
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Atoms
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
