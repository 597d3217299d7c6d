//! Option entries derived from the manifest.

use serde::Serialize;

use crate::base_path::BasePath;
use crate::manifest::VersionManifest;

/// One selectable item of the version selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
    /// Navigation target
    pub value: String,
    /// Display name from the manifest
    pub label: String,
    /// Whether this entry is the version currently being viewed
    pub selected: bool,
}

/// Navigation target of a version: `<base>/<dir>/<suffix>`.
///
/// Depends on nothing but its inputs, so every page of a doc set renders
/// identical links for the same manifest.
///
/// ```rust
/// use version_switcher::base_path::resolve_base_path;
/// use version_switcher::options::target_url;
///
/// let base = resolve_base_path("https://example.org/proj/versions/master/html/", "proj/versions").unwrap();
/// assert_eq!(
///     target_url(&base, "v1.0", "html/index.html"),
///     "https://example.org/proj/versions/v1.0/html/index.html"
/// );
/// ```
pub fn target_url(base: &BasePath, dir: &str, suffix: &str) -> String {
    format!(
        "{}/{}/{}",
        base.as_str(),
        dir,
        suffix.trim_start_matches('/')
    )
}

/// Build one entry per manifest entry, in manifest order.
///
/// No sorting, de-duplication or filtering happens here. `current` marks the
/// entry whose directory matches the page being viewed.
pub fn build_options(
    base: &BasePath,
    manifest: &VersionManifest,
    suffix: &str,
    current: Option<&str>,
) -> Vec<OptionEntry> {
    manifest
        .iter()
        .map(|(dir, name)| OptionEntry {
            value: target_url(base, dir, suffix),
            label: name.to_string(),
            selected: current == Some(dir),
        })
        .collect()
}
