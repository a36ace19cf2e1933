//! Design-token flattening for the CSS token pipeline
//!
//! Token source files are nested JSON objects (`color.blue.500`); the CSS
//! tooling wants a flat map with `-`-joined keys (`color-blue-500`). Arrays
//! and scalars pass through as leaf values.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;

/// Flatten a nested token object into a `"a-b-c" -> value` map.
/// Key order is deterministic (sorted), so output is diff-stable.
pub fn flatten(tokens: &Value) -> Result<BTreeMap<String, Value>> {
    let root = match tokens.as_object() {
        Some(obj) => obj,
        None => bail!("Token source must be a JSON object at the top level"),
    };

    let mut flat = BTreeMap::new();
    for (key, value) in root {
        walk(key, value, &mut flat);
    }
    Ok(flat)
}

fn walk(prefix: &str, value: &Value, out: &mut BTreeMap<String, Value>) {
    match value {
        Value::Object(obj) => {
            for (key, child) in obj {
                walk(&format!("{}-{}", prefix, key), child, out);
            }
        }
        leaf => {
            out.insert(prefix.to_string(), leaf.clone());
        }
    }
}

/// Read a token source file and render its flattened form as pretty JSON
pub async fn flatten_file(input: &Path) -> Result<String> {
    let text = fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let tokens: Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    let flat = flatten(&tokens)?;
    Ok(format!("{}\n", serde_json::to_string_pretty(&flat)?))
}
