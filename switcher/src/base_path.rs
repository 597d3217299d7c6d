//! Base-path resolution.
//!
//! Every version of the documentation is built under a shared root, e.g.
//!
//! ```text
//! https://example.org/proj/versions/master/html/index.html
//! \_______________________________/\______________________/
//!            base path                  version suffix
//! ```
//!
//! The base path is everything up to and including the last occurrence of
//! the marker segment (`proj/versions` above). Only the path part of the URL
//! is searched; query strings and fragments never produce a match.

use std::fmt;

/// URL prefix shared by every version build of a documentation set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasePath(String);

impl BasePath {
    /// Borrow the prefix as a string slice (no trailing slash).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the owned prefix.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for BasePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve the base path of `url` for the given marker segment.
///
/// Returns `None` when the marker does not occur as a whole path segment
/// sequence, or when the marker itself is empty. Surrounding slashes in the
/// marker are ignored, so `"/proj/versions/"` behaves like `"proj/versions"`.
///
/// ```rust
/// use version_switcher::base_path::resolve_base_path;
///
/// let base = resolve_base_path(
///     "https://example.org/proj/versions/master/html/index.html",
///     "proj/versions",
/// )
/// .unwrap();
/// assert_eq!(base.as_str(), "https://example.org/proj/versions");
///
/// assert!(resolve_base_path("https://example.org/other/page.html", "proj/versions").is_none());
/// ```
pub fn resolve_base_path(url: &str, marker: &str) -> Option<BasePath> {
    let marker = marker.trim_matches('/');
    if marker.is_empty() {
        return None;
    }

    let path = &url[..path_end(url)];
    let needle = format!("/{marker}");

    path.match_indices(&needle)
        .map(|(idx, _)| idx + needle.len())
        .filter(|&end| path[end..].is_empty() || path[end..].starts_with('/'))
        .last()
        .map(|end| BasePath(path[..end].to_string()))
}

/// Version directory of the page at `url`: the first segment after `base`.
///
/// ```rust
/// use version_switcher::base_path::{current_version, resolve_base_path};
///
/// let url = "https://example.org/proj/versions/v1.0/html/api.html";
/// let base = resolve_base_path(url, "proj/versions").unwrap();
/// assert_eq!(current_version(url, &base), Some("v1.0"));
/// ```
pub fn current_version<'a>(url: &'a str, base: &BasePath) -> Option<&'a str> {
    let rest = url[..path_end(url)]
        .strip_prefix(base.as_str())?
        .strip_prefix('/')?;
    let segment = rest.split('/').next()?;
    (!segment.is_empty()).then_some(segment)
}

/// Byte offset where the path part of `url` ends.
fn path_end(url: &str) -> usize {
    url.find(['?', '#']).unwrap_or(url.len())
}
