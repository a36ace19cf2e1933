//! Path derivation and the four-artifact generate operation

use crate::artifacts::{content, story, style, template, ArtifactKind, StyleMergeOutcome};
use crate::category::Category;
use crate::manifest::ProjectManifest;
use crate::naming::ComponentName;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// One scaffolding invocation: a component name, its category, and the
/// project root the generated paths hang off
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub name: ComponentName,
    pub category: Category,
    pub root: PathBuf,
}

/// The four output paths derived for a component
#[derive(Debug, Clone)]
pub struct ComponentPaths {
    pub template: PathBuf,
    pub content: PathBuf,
    pub style: PathBuf,
    pub story: PathBuf,
}

impl ComponentPaths {
    /// Derive all four paths from the request and project manifest.
    /// All artifacts of one invocation share the same category and slug.
    pub fn derive(request: &ScaffoldRequest, manifest: &ProjectManifest) -> Self {
        let source = request.root.join(&manifest.source_dir);
        let category = request.category;

        Self {
            template: source
                .join("_includes")
                .join(category.dir_prefix())
                .join(format!("{}.{}", request.name.slug(), manifest.template_ext)),
            content: source
                .join("_data")
                .join("contents")
                .join(category.key())
                .join(format!("{}.json", request.name.plural_slug())),
            style: source
                .join("_data")
                .join("styles")
                .join(format!("{}.json", category.key())),
            story: source
                .join("stories")
                .join(category.key())
                .join(format!("{}.{}", request.name.pascal(), manifest.story_ext)),
        }
    }
}

/// Decides whether an existing file may be overwritten.
///
/// The scaffold logic stays headless by taking this as a collaborator: the
/// TUI supplies a confirm prompt, batch callers and tests supply one of the
/// deterministic resolvers below.
pub trait ConflictResolver {
    fn resolve(&self, path: &Path) -> Result<bool>;
}

/// Overwrite every collision without asking (`--yes`)
pub struct AlwaysOverwrite;

impl ConflictResolver for AlwaysOverwrite {
    fn resolve(&self, _path: &Path) -> Result<bool> {
        Ok(true)
    }
}

/// Skip every collision without asking (`--keep-existing`)
pub struct AlwaysSkip;

impl ConflictResolver for AlwaysSkip {
    fn resolve(&self, _path: &Path) -> Result<bool> {
        Ok(false)
    }
}

/// How one artifact resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Overwritten,
    Skipped,
    Merged,
    Unchanged,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Created => "created",
            Outcome::Overwritten => "overwritten",
            Outcome::Skipped => "skipped",
            Outcome::Merged => "merged",
            Outcome::Unchanged => "unchanged",
        }
    }
}

/// Per-artifact result of a generate run
#[derive(Debug)]
pub struct ArtifactReport {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub outcome: Outcome,
    /// Warning text for soft conditions (existing slug entry, recovered
    /// malformed style file)
    pub warning: Option<String>,
}

/// Generate the four artifacts for a component.
///
/// Parent directories are created as needed. The template, content and story
/// artifacts each resolve independently: missing files are written directly,
/// collisions go through the resolver. The shared style file follows the
/// merge policy in [`style::merge_into_file`] and never consults the
/// resolver. Writes are atomic (temp sibling then rename), so a crash never
/// leaves a truncated artifact behind.
pub async fn generate(
    request: &ScaffoldRequest,
    manifest: &ProjectManifest,
    resolver: &dyn ConflictResolver,
) -> Result<Vec<ArtifactReport>> {
    let paths = ComponentPaths::derive(request, manifest);

    for path in [&paths.template, &paths.content, &paths.style, &paths.story] {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let slug = request.name.slug();
    let mut reports = Vec::with_capacity(4);

    let template_body = template::render(&request.name, request.category);
    reports.push(
        write_resolved(ArtifactKind::Template, &paths.template, &template_body, resolver).await?,
    );

    let content_body = content::render(&request.name)?;
    reports.push(
        write_resolved(ArtifactKind::Content, &paths.content, &content_body, resolver).await?,
    );

    let merge = style::merge_into_file(&paths.style, &slug).await?;
    reports.push(style_report(&paths.style, &slug, merge));

    let story_body = story::render(&request.name, request.category, manifest);
    reports.push(write_resolved(ArtifactKind::Story, &paths.story, &story_body, resolver).await?);

    Ok(reports)
}

/// Write one artifact, consulting the resolver when the target exists
async fn write_resolved(
    kind: ArtifactKind,
    path: &Path,
    body: &str,
    resolver: &dyn ConflictResolver,
) -> Result<ArtifactReport> {
    let outcome = if path.exists() {
        if resolver.resolve(path)? {
            write_atomic(path, body).await?;
            Outcome::Overwritten
        } else {
            Outcome::Skipped
        }
    } else {
        write_atomic(path, body).await?;
        Outcome::Created
    };

    Ok(ArtifactReport {
        kind,
        path: path.to_path_buf(),
        outcome,
        warning: None,
    })
}

fn style_report(path: &Path, slug: &str, merge: StyleMergeOutcome) -> ArtifactReport {
    let (outcome, warning) = match merge {
        StyleMergeOutcome::CreatedFile => (Outcome::Created, None),
        StyleMergeOutcome::Inserted => (Outcome::Merged, None),
        StyleMergeOutcome::AlreadyPresent => (
            Outcome::Unchanged,
            Some(format!(
                "style entry \"{}\" already exists; left untouched",
                slug
            )),
        ),
        StyleMergeOutcome::RecoveredMalformed => (
            Outcome::Merged,
            Some(format!(
                "{} was not valid JSON; treated as empty and rewritten",
                path.display()
            )),
        ),
    };

    ArtifactReport {
        kind: ArtifactKind::Style,
        path: path.to_path_buf(),
        outcome,
        warning,
    }
}

/// Write a file atomically: write to a temp sibling, then rename over the
/// target. Rename within one directory is atomic on POSIX filesystems.
pub(crate) async fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .context("Target path has no file name")?;
    let tmp = path.with_file_name(format!(".{}.tmp", file_name));

    fs::write(&tmp, content)
        .await
        .with_context(|| format!("Failed to write file: {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .await
        .with_context(|| format!("Failed to move {} into place", tmp.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::content::ContentRecord;

    fn request(dir: &tempfile::TempDir, name: &str, category: Category) -> ScaffoldRequest {
        ScaffoldRequest {
            name: ComponentName::new(name).unwrap(),
            category,
            root: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn test_path_derivation() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(&dir, "Badge", Category::Molecules);
        let paths = ComponentPaths::derive(&req, &ProjectManifest::default());
        let root = dir.path();

        assert_eq!(
            paths.template,
            root.join("src/_includes/02-molecules/badge.njk")
        );
        assert_eq!(
            paths.content,
            root.join("src/_data/contents/molecules/badges.json")
        );
        assert_eq!(paths.style, root.join("src/_data/styles/molecules.json"));
        assert_eq!(
            paths.story,
            root.join("src/stories/molecules/Badge.stories.js")
        );
    }

    #[test]
    fn test_unrecognized_category_matches_atoms_paths() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = ProjectManifest::default();

        let fallback = request(&dir, "Button", Category::parse("wigets"));
        let atoms = request(&dir, "Button", Category::Atoms);

        let a = ComponentPaths::derive(&fallback, &manifest);
        let b = ComponentPaths::derive(&atoms, &manifest);
        assert_eq!(a.template, b.template);
        assert_eq!(a.content, b.content);
        assert_eq!(a.style, b.style);
        assert_eq!(a.story, b.story);
    }

    #[tokio::test]
    async fn test_generate_on_empty_root_creates_four_files() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(&dir, "Badge", Category::Molecules);
        let manifest = ProjectManifest::default();

        let reports = generate(&req, &manifest, &AlwaysSkip).await.unwrap();
        assert_eq!(reports.len(), 4);
        for report in &reports {
            assert_eq!(report.outcome, Outcome::Created, "{:?}", report.kind);
            assert!(report.path.exists());
        }

        let paths = ComponentPaths::derive(&req, &manifest);
        let records: Vec<ContentRecord> =
            serde_json::from_str(&std::fs::read_to_string(&paths.content).unwrap()).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["default-badge", "primary-badge", "secondary-badge"]);
    }

    #[tokio::test]
    async fn test_declined_overwrite_leaves_file_and_writes_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(&dir, "Badge", Category::Molecules);
        let manifest = ProjectManifest::default();
        let paths = ComponentPaths::derive(&req, &manifest);

        std::fs::create_dir_all(paths.template.parent().unwrap()).unwrap();
        std::fs::write(&paths.template, "hand-written macro").unwrap();

        let reports = generate(&req, &manifest, &AlwaysSkip).await.unwrap();

        let template = reports
            .iter()
            .find(|r| r.kind == ArtifactKind::Template)
            .unwrap();
        assert_eq!(template.outcome, Outcome::Skipped);
        assert_eq!(
            std::fs::read_to_string(&paths.template).unwrap(),
            "hand-written macro"
        );

        // The other three artifacts resolve independently
        assert!(paths.content.exists());
        assert!(paths.style.exists());
        assert!(paths.story.exists());
    }

    #[tokio::test]
    async fn test_rerun_with_overwrite_keeps_style_entry_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(&dir, "Button", Category::Atoms);
        let manifest = ProjectManifest::default();
        let paths = ComponentPaths::derive(&req, &manifest);

        generate(&req, &manifest, &AlwaysOverwrite).await.unwrap();
        let style_before = std::fs::read_to_string(&paths.style).unwrap();

        let reports = generate(&req, &manifest, &AlwaysOverwrite).await.unwrap();
        let style = reports
            .iter()
            .find(|r| r.kind == ArtifactKind::Style)
            .unwrap();

        // Insert-if-absent: the rerun never rewrites the shared style file
        assert_eq!(style.outcome, Outcome::Unchanged);
        assert!(style.warning.is_some());
        assert_eq!(std::fs::read_to_string(&paths.style).unwrap(), style_before);

        let template = reports
            .iter()
            .find(|r| r.kind == ArtifactKind::Template)
            .unwrap();
        assert_eq!(template.outcome, Outcome::Overwritten);
    }

    #[tokio::test]
    async fn test_write_atomic_leaves_no_temp_sibling() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_atomic(&path, "{}\n").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries.len(), 1);
    }
}
