//! Widget configuration.
//!
//! Every constant the switcher relies on (marker segment, manifest location,
//! mount point, element ids) lives here so a documentation site with a
//! different layout can override it without touching the pipeline.
//!
//! ```rust
//! use version_switcher::config::SwitcherConfig;
//!
//! let config = SwitcherConfig::from_json(r#"{ "marker": "proj/versions" }"#).unwrap();
//! assert_eq!(config.marker, "proj/versions");
//! assert_eq!(config.manifest_location, "../../versions.json");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Marker segment separating the shared docs root from the per-version suffix.
pub const DEFAULT_MARKER: &str = "cime/versions";

/// Manifest path, relative to a version's build directory (two levels above it).
pub const DEFAULT_MANIFEST_LOCATION: &str = "../../versions.json";

/// Container the selector is mounted into.
pub const DEFAULT_MOUNT_SELECTOR: &str = ".version";

/// Fixed suffix of every navigation target, following the doc-build layout.
pub const DEFAULT_PAGE_SUFFIX: &str = "html/index.html";

/// id of the wrapper element around the select.
pub const DEFAULT_DROPDOWN_ID: &str = "version-dropdown";

/// id of the select element.
pub const DEFAULT_LIST_ID: &str = "version-list";

/// Switcher configuration.
///
/// Missing fields fall back to the defaults above when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitcherConfig {
    /// Marker segment, e.g. `"cime/versions"`
    pub marker: String,
    /// Manifest location relative to `<base>/<version>/html/`
    pub manifest_location: String,
    /// CSS selector of the mount container
    pub mount_selector: String,
    /// Suffix appended after the version directory
    pub page_suffix: String,
    /// id given to the wrapper `<div>`
    pub dropdown_id: String,
    /// id given to the `<select>`
    pub list_id: String,
    /// Hide the wrapper when the manifest cannot be loaded
    pub hide_on_failure: bool,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            manifest_location: DEFAULT_MANIFEST_LOCATION.to_string(),
            mount_selector: DEFAULT_MOUNT_SELECTOR.to_string(),
            page_suffix: DEFAULT_PAGE_SUFFIX.to_string(),
            dropdown_id: DEFAULT_DROPDOWN_ID.to_string(),
            list_id: DEFAULT_LIST_ID.to_string(),
            hide_on_failure: false,
        }
    }
}

impl SwitcherConfig {
    /// Parse a (possibly partial) JSON object into a config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Override the marker, keeping the rest untouched.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Override the manifest location, keeping the rest untouched.
    pub fn with_manifest_location(mut self, location: impl Into<String>) -> Self {
        self.manifest_location = location.into();
        self
    }

    /// Reject configurations the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.marker.trim_matches('/').is_empty() {
            return Err(ConfigError::Invalid("marker must not be empty".into()));
        }
        if self.manifest_location.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "manifest_location must not be empty".into(),
            ));
        }
        if self.mount_selector.trim().is_empty() {
            return Err(ConfigError::Invalid("mount_selector must not be empty".into()));
        }
        Ok(())
    }
}
