//! Content-data artifact rendering (example records JSON)

use crate::artifacts::VARIANTS;
use crate::naming::ComponentName;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One example record in a component's content data file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: String,
    pub label: String,
    pub style: String,
    pub description: String,
}

/// Build the three seeded example records for a component.
/// Record ids are `<variant>-<slug>`, one per style variant.
pub fn example_records(name: &ComponentName) -> Vec<ContentRecord> {
    let slug = name.slug();
    let pascal = name.pascal();

    VARIANTS
        .iter()
        .map(|variant| ContentRecord {
            id: format!("{}-{}", variant, slug),
            label: format!("{} {}", capitalize(variant), pascal),
            style: variant.to_string(),
            description: format!(
                "Example of the {} component in its {} style.",
                slug, variant
            ),
        })
        .collect()
}

/// Render the content data file body
pub fn render(name: &ComponentName) -> Result<String> {
    let records = example_records(name);
    Ok(format!("{}\n", serde_json::to_string_pretty(&records)?))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_record_ids() {
        let name = ComponentName::new("Badge").unwrap();
        let records = example_records(&name);

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["default-badge", "primary-badge", "secondary-badge"]);
    }

    #[test]
    fn test_records_cover_each_variant_once() {
        let name = ComponentName::new("Card").unwrap();
        let records = example_records(&name);

        assert_eq!(records.len(), 3);
        for (record, variant) in records.iter().zip(VARIANTS) {
            assert_eq!(record.style, variant);
            assert!(!record.label.is_empty());
            assert!(record.description.contains("card"));
        }
    }

    #[test]
    fn test_render_is_valid_json_array() {
        let name = ComponentName::new("Chip").unwrap();
        let body = render(&name).unwrap();

        let parsed: Vec<ContentRecord> = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].id, "default-chip");
    }
}
