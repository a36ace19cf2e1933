//! Shared per-category style file and its additive-only merge policy
//!
//! Style files are shared across every component of a category and are often
//! hand-edited after scaffolding, so the merge never replaces an existing
//! slug entry and never prompts: a present key leaves the file untouched.

use crate::scaffold::write_atomic;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Utility-class strings for the three seeded style variants of a component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleVariants {
    pub default: String,
    pub primary: String,
    pub secondary: String,
}

impl StyleVariants {
    /// The fixed variant map new components are seeded with
    pub fn seed() -> Self {
        Self {
            default: "inline-block rounded px-4 py-2 bg-gray-100 text-gray-900".to_string(),
            primary: "inline-block rounded px-4 py-2 bg-blue-600 text-white".to_string(),
            secondary: "inline-block rounded px-4 py-2 border border-blue-600 text-blue-600"
                .to_string(),
        }
    }
}

/// How the style merge resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleMergeOutcome {
    /// No style file existed for the category; a fresh one was written
    CreatedFile,
    /// The slug was absent and has been added; all other keys preserved
    Inserted,
    /// The slug already had an entry; the file was left untouched
    AlreadyPresent,
    /// The existing file failed to parse; it was treated as empty and
    /// overwritten, discarding whatever it held
    RecoveredMalformed,
}

/// Merge the seed variant map for `slug` into the category style file.
///
/// Insert-if-absent only: an existing `slug` key is never modified. A file
/// that fails to parse is a soft error, treated as empty and overwritten
/// (the caller should surface `RecoveredMalformed` as a warning).
pub async fn merge_into_file(path: &Path, slug: &str) -> Result<StyleMergeOutcome> {
    let existing = match fs::read_to_string(path).await {
        Ok(text) => Some(text),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let file_existed = existing.is_some();
    let (mut entries, malformed) = match existing {
        None => (Map::new(), false),
        Some(text) => match serde_json::from_str::<Map<String, Value>>(&text) {
            Ok(map) => (map, false),
            Err(_) => (Map::new(), true),
        },
    };

    if entries.contains_key(slug) {
        return Ok(StyleMergeOutcome::AlreadyPresent);
    }

    entries.insert(slug.to_string(), serde_json::to_value(StyleVariants::seed())?);

    let body = format!(
        "{}\n",
        serde_json::to_string_pretty(&Value::Object(entries))?
    );
    write_atomic(path, &body).await?;

    Ok(if malformed {
        StyleMergeOutcome::RecoveredMalformed
    } else if file_existed {
        StyleMergeOutcome::Inserted
    } else {
        StyleMergeOutcome::CreatedFile
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
        dir.path().join("atoms.json")
    }

    #[tokio::test]
    async fn test_fresh_file_created_with_three_variants() {
        let dir = tempfile::tempdir().unwrap();
        let path = style_path(&dir);

        let outcome = merge_into_file(&path, "card").await.unwrap();
        assert_eq!(outcome, StyleMergeOutcome::CreatedFile);

        let body = std::fs::read_to_string(&path).unwrap();
        let parsed: Map<String, Value> = serde_json::from_str(&body).unwrap();
        let card = parsed.get("card").unwrap().as_object().unwrap();
        assert_eq!(card.len(), 3);
        for variant in ["default", "primary", "secondary"] {
            assert!(card.get(variant).unwrap().is_string());
        }
    }

    #[tokio::test]
    async fn test_insert_preserves_existing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = style_path(&dir);
        std::fs::write(
            &path,
            r#"{ "button": { "default": "hand-edited", "primary": "p", "secondary": "s" } }"#,
        )
        .unwrap();

        let outcome = merge_into_file(&path, "card").await.unwrap();
        assert_eq!(outcome, StyleMergeOutcome::Inserted);

        let parsed: Map<String, Value> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(parsed.contains_key("card"));
        assert_eq!(parsed["button"]["default"], "hand-edited");
    }

    #[tokio::test]
    async fn test_existing_slug_left_byte_for_byte_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = style_path(&dir);
        let original = r#"{"button":{"default":"custom classes"}}"#;
        std::fs::write(&path, original).unwrap();

        let outcome = merge_into_file(&path, "button").await.unwrap();
        assert_eq!(outcome, StyleMergeOutcome::AlreadyPresent);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[tokio::test]
    async fn test_malformed_file_recovered_and_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = style_path(&dir);
        std::fs::write(&path, "not json at all {{{").unwrap();

        let outcome = merge_into_file(&path, "chip").await.unwrap();
        assert_eq!(outcome, StyleMergeOutcome::RecoveredMalformed);

        // The malformed content is gone; only the fresh entry remains
        let parsed: Map<String, Value> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert!(parsed.contains_key("chip"));
    }
}
