//! Artifact rendering and merge policies
//!
//! This module provides:
//! - The four artifact bodies (template macro, content data, style data, story)
//! - The additive-only merge policy for shared per-category style files
//! - Style variant names shared by all generated artifacts

pub mod content;
pub mod story;
pub mod style;
pub mod template;

pub use content::ContentRecord;
pub use style::{StyleMergeOutcome, StyleVariants};

/// Style variants every component is seeded with, in content-record order
pub const VARIANTS: [&str; 3] = ["default", "primary", "secondary"];

/// Which of the four generated artifacts a path or report refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Template,
    Content,
    Style,
    Story,
}

impl ArtifactKind {
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Template => "template",
            ArtifactKind::Content => "content",
            ArtifactKind::Style => "style",
            ArtifactKind::Story => "story",
        }
    }
}
