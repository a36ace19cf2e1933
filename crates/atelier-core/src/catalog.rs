//! Catalog of already-scaffolded components

use crate::category::Category;
use crate::manifest::ProjectManifest;
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One template file found under the includes directory
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub category: Category,
    pub slug: String,
    pub path: PathBuf,
}

/// Scan `<root>/<source_dir>/_includes` for component templates.
///
/// Only files with the manifest's template extension inside a recognized
/// category directory count; anything else (partials, layouts, stray files)
/// is ignored. Entries come back sorted by category, then slug.
pub fn scan(root: &Path, manifest: &ProjectManifest) -> Result<Vec<CatalogEntry>> {
    let includes = root.join(&manifest.source_dir).join("_includes");
    if !includes.is_dir() {
        return Ok(Vec::new());
    }

    let suffix = format!(".{}", manifest.template_ext);
    let mut entries = Vec::new();

    for entry in WalkDir::new(&includes).min_depth(2).max_depth(2) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = match entry.file_name().to_str() {
            Some(name) => name,
            None => continue,
        };
        let slug = match file_name.strip_suffix(&suffix) {
            Some(slug) if !slug.is_empty() => slug,
            _ => continue,
        };

        let category = entry
            .path()
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .and_then(Category::from_dir_prefix);

        if let Some(category) = category {
            entries.push(CatalogEntry {
                category,
                slug: slug.to_string(),
                path: entry.path().to_path_buf(),
            });
        }
    }

    entries.sort_by_key(|e| (e.category.dir_prefix(), e.slug.clone()));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "").unwrap();
    }

    #[test]
    fn test_scan_finds_templates_by_category() {
        let dir = tempfile::tempdir().unwrap();
        let includes = dir.path().join("src/_includes");
        touch(&includes.join("01-atoms/button.njk"));
        touch(&includes.join("01-atoms/chip.njk"));
        touch(&includes.join("02-molecules/card.njk"));

        let entries = scan(dir.path(), &ProjectManifest::default()).unwrap();
        let found: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.category.key(), e.slug.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![
                ("atoms", "button"),
                ("atoms", "chip"),
                ("molecules", "card")
            ]
        );
    }

    #[test]
    fn test_scan_ignores_unrecognized_dirs_and_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let includes = dir.path().join("src/_includes");
        touch(&includes.join("01-atoms/button.njk"));
        touch(&includes.join("01-atoms/notes.md"));
        touch(&includes.join("layouts/base.njk"));

        let entries = scan(dir.path(), &ProjectManifest::default()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].slug, "button");
    }

    #[test]
    fn test_scan_missing_includes_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let entries = scan(dir.path(), &ProjectManifest::default()).unwrap();
        assert!(entries.is_empty());
    }
}
