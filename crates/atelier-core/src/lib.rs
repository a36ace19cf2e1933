//! Atelier Core - Shared library for design-system component scaffolding
//!
//! This library turns a `(component name, category)` pair into the four
//! generated artifacts of an Eleventy + Storybook design-system project:
//! a Nunjucks macro template, a content data file, an entry in the shared
//! per-category style file, and a stories file.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Pure derivation** - name forms ([`naming`]), categories
//!   ([`category`]), and output paths ([`scaffold::ComponentPaths`])
//! - **Layer 2: Generation** - artifact rendering ([`artifacts`]), the
//!   non-destructive style merge, and [`scaffold::generate`] with an
//!   injectable [`scaffold::ConflictResolver`]
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use atelier_core::{generate, AlwaysOverwrite, Category, ComponentName,
//!                    ProjectManifest, ScaffoldRequest};
//!
//! let request = ScaffoldRequest {
//!     name: ComponentName::new("Badge")?,
//!     category: Category::Molecules,
//!     root: ".".into(),
//! };
//! let manifest = ProjectManifest::load(&request.root).await?;
//! let reports = generate(&request, &manifest, &AlwaysOverwrite).await?;
//! ```

pub mod artifacts;
pub mod catalog;
pub mod category;
pub mod manifest;
pub mod naming;
pub mod scaffold;
pub mod tokens;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use category::Category;
pub use manifest::ProjectManifest;
pub use naming::ComponentName;
pub use scaffold::{
    generate, AlwaysOverwrite, AlwaysSkip, ArtifactReport, ComponentPaths, ConflictResolver,
    Outcome, ScaffoldRequest,
};

#[cfg(feature = "tui")]
pub use tui::run;
