//! Component name derivation (slug, PascalCase, pluralized data-file name)

use heck::{ToKebabCase, ToLowerCamelCase, ToPascalCase};
use std::fmt;

/// Error raised when a component name fails validation
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NameError {
    #[error("component name must not be empty")]
    Empty,
    #[error("component name must contain at least one alphanumeric character")]
    NoWordCharacters,
}

/// Operator-supplied component name with its derived identifier forms
///
/// All derivations are pure and computed from the raw name on demand:
/// - `slug()` is kebab-case, used for file names and CSS class names
/// - `pascal()` is PascalCase, used for generated story identifiers
/// - `plural_slug()` names the shared content data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentName {
    raw: String,
}

impl ComponentName {
    /// Validate and wrap a raw component name.
    ///
    /// The derived slug is what ends up in file names and CSS classes, so
    /// validation is against it: a name made only of separators ("-", "_ _")
    /// would otherwise slip through and produce files like `.njk`.
    pub fn new(raw: impl Into<String>) -> Result<Self, NameError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(NameError::Empty);
        }
        if raw.to_kebab_case().is_empty() {
            return Err(NameError::NoWordCharacters);
        }
        Ok(Self { raw })
    }

    /// The name as the operator typed it
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Kebab-case slug: lower-cased, hyphenated at camelCase/space/underscore
    /// boundaries. Idempotent: `kebab(kebab(x)) == kebab(x)`.
    pub fn slug(&self) -> String {
        self.raw.to_kebab_case()
    }

    /// PascalCase form with separators stripped
    pub fn pascal(&self) -> String {
        self.raw.to_pascal_case()
    }

    /// lowerCamelCase form, used for generated macro identifiers
    /// (hyphens are not valid in Nunjucks macro names)
    pub fn macro_name(&self) -> String {
        self.raw.to_lower_camel_case()
    }

    /// Naive pluralization of the slug: append `s`, no linguistic rules.
    /// "box" becomes "boxs"; kept that way for compatibility with the
    /// existing data-file layout.
    pub fn plural_slug(&self) -> String {
        format!("{}s", self.slug())
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
