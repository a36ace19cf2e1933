//! Project manifest (`atelier.yaml`) parsing and version compatibility

use anyhow::{Context, Result};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Manifest file name looked up at the project root
pub const MANIFEST_FILE: &str = "atelier.yaml";

/// Optional per-project configuration (`<root>/atelier.yaml`)
///
/// Absent file means defaults. A present-but-malformed manifest is a hard
/// error: it is operator-authored configuration, unlike the generated style
/// data which is recovered leniently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectManifest {
    /// Minimum CLI version this project expects (semver, warning-only)
    #[serde(default = "defaults::version")]
    pub version: String,

    /// Source directory all generated paths are rooted under
    #[serde(default = "defaults::source_dir")]
    pub source_dir: String,

    /// Extension for generated template-macro files
    #[serde(default = "defaults::template_ext")]
    pub template_ext: String,

    /// Extension for generated story files
    #[serde(default = "defaults::story_ext")]
    pub story_ext: String,
}

mod defaults {
    pub fn version() -> String {
        "0.1.0".to_string()
    }
    pub fn source_dir() -> String {
        "src".to_string()
    }
    pub fn template_ext() -> String {
        "njk".to_string()
    }
    pub fn story_ext() -> String {
        "stories.js".to_string()
    }
}

impl Default for ProjectManifest {
    fn default() -> Self {
        Self {
            version: defaults::version(),
            source_dir: defaults::source_dir(),
            template_ext: defaults::template_ext(),
            story_ext: defaults::story_ext(),
        }
    }
}

impl ProjectManifest {
    /// Load the manifest from the project root, falling back to defaults
    /// when no manifest file exists
    pub async fn load(root: &Path) -> Result<Self> {
        let path = root.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

/// Warn when the running CLI is older than the version the project manifest
/// asks for. Unparseable versions on either side never warn; a stale or
/// hand-mangled version field should not block scaffolding.
pub fn check_compatibility(
    cli_version: &str,
    manifest_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let (cli, expected) = match (Version::parse(cli_version), Version::parse(manifest_version)) {
        (Ok(cli), Ok(expected)) => (cli, expected),
        _ => return None,
    };

    (cli < expected).then(|| {
        format!(
            "This project asks for CLI {} or newer, but this is {}. Update with: {}",
            expected, cli, upgrade_command
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_manifest_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = ProjectManifest::load(dir.path()).await.unwrap();
        assert_eq!(manifest.source_dir, "src");
        assert_eq!(manifest.template_ext, "njk");
        assert_eq!(manifest.story_ext, "stories.js");
    }

    #[tokio::test]
    async fn test_partial_manifest_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "template_ext: liquid\n").unwrap();

        let manifest = ProjectManifest::load(dir.path()).await.unwrap();
        assert_eq!(manifest.template_ext, "liquid");
        assert_eq!(manifest.source_dir, "src");
    }

    #[tokio::test]
    async fn test_malformed_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "source_dir: [not: closed\n").unwrap();

        assert!(ProjectManifest::load(dir.path()).await.is_err());
    }

    #[test]
    fn test_warns_when_cli_is_behind_manifest() {
        let warning = check_compatibility("1.2.3", "2.0.0", "cargo install atelier-tools --force")
            .expect("a CLI behind the manifest should warn");
        assert!(warning.contains("2.0.0"));
        assert!(warning.contains("1.2.3"));
        assert!(warning.contains("cargo install atelier-tools --force"));
    }

    #[test]
    fn test_no_warning_when_cli_matches_or_exceeds() {
        assert!(check_compatibility("2.0.0", "2.0.0", "n/a").is_none());
        assert!(check_compatibility("2.1.0", "2.0.0", "n/a").is_none());
    }

    #[test]
    fn test_unparseable_versions_never_warn() {
        assert!(check_compatibility("not-a-version", "2.0.0", "n/a").is_none());
        assert!(check_compatibility("1.0.0", "latest", "n/a").is_none());
    }
}
