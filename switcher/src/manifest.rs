//! Version manifest.
//!
//! The manifest is a flat JSON object published next to the version builds:
//!
//! ```json
//! { "master": "latest", "v1.0": "1.0 (stable)" }
//! ```
//!
//! Keys are version directories, values are display names. Entries keep the
//! order they have in the document.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::error::ManifestError;

/// Read-only mapping of version directory to display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VersionManifest {
    entries: IndexMap<String, String>,
}

impl VersionManifest {
    /// Parse a manifest document.
    ///
    /// String values are taken as-is. Numbers and booleans are coerced to
    /// their JSON text so `{"v2": 2}` still yields a usable label. `null`,
    /// arrays and nested objects are skipped.
    ///
    /// ```rust
    /// use version_switcher::manifest::VersionManifest;
    ///
    /// let manifest = VersionManifest::from_json(r#"{"master": "latest", "v1.0": "1.0 (stable)"}"#).unwrap();
    /// assert_eq!(manifest.len(), 2);
    /// assert_eq!(manifest.get("v1.0"), Some("1.0 (stable)"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let map = match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => map,
            other => return Err(ManifestError::NotAnObject(kind_of(&other))),
        };

        let mut entries = IndexMap::with_capacity(map.len());
        for (dir, name) in map {
            let label = match name {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    warn!(
                        "Skipping manifest entry {:?}: expected a string label, got {}",
                        dir,
                        kind_of(&other)
                    );
                    continue;
                }
            };
            entries.insert(dir, label);
        }

        Ok(Self { entries })
    }

    /// Number of usable entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display name of a version directory.
    pub fn get(&self, dir: &str) -> Option<&str> {
        self.entries.get(dir).map(String::as_str)
    }

    /// `(directory, display name)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(dir, name)| (dir.as_str(), name.as_str()))
    }
}

impl FromIterator<(String, String)> for VersionManifest {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
