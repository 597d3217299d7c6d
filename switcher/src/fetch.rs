//! Manifest retrieval.

use async_trait::async_trait;
use tracing::debug;

use crate::base_path::BasePath;
use crate::error::{FetchError, SwitcherError};
use crate::manifest::VersionManifest;

/// Reads the manifest resource.
///
/// Implementations issue exactly one request per call: no retry, no timeout
/// and no cancellation. `location` is the URL built by [`manifest_url`].
#[async_trait(?Send)]
pub trait ManifestFetcher {
    async fn fetch_manifest(&self, location: &str) -> Result<String, FetchError>;
}

/// Absolute URL of the manifest.
///
/// A relative `location` is resolved against the build directory of a
/// version (`<base>/<version>/html/` for the default `page_suffix`), never
/// against the page itself, so every page of a doc set asks for the same
/// file. Absolute URLs and root-relative paths are returned unchanged.
///
/// ```rust
/// use version_switcher::base_path::resolve_base_path;
/// use version_switcher::fetch::manifest_url;
///
/// let page = "https://example.org/proj/versions/v1.0/html/guide/install.html";
/// let base = resolve_base_path(page, "proj/versions").unwrap();
/// assert_eq!(
///     manifest_url(&base, "../../versions.json", "html/index.html", Some("v1.0")),
///     "https://example.org/proj/versions/versions.json"
/// );
/// ```
pub fn manifest_url(
    base: &BasePath,
    location: &str,
    page_suffix: &str,
    current: Option<&str>,
) -> String {
    if location.starts_with('/') || location.contains("://") {
        return location.to_string();
    }

    let suffix_dirs = page_suffix
        .trim_matches('/')
        .rsplit_once('/')
        .map_or("", |(dirs, _)| dirs);

    // An unknown version still occupies one level so `..` counts stay fixed.
    let mut dirs: Vec<&str> = vec![current.unwrap_or("")];
    dirs.extend(suffix_dirs.split('/').filter(|s| !s.is_empty()));

    let mut root = base.as_str().to_string();
    for segment in location.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if dirs.pop().is_none() {
                    pop_segment(&mut root);
                }
            }
            other => dirs.push(other),
        }
    }

    dirs.into_iter()
        .filter(|s| !s.is_empty())
        .fold(root, |mut url, dir| {
            url.push('/');
            url.push_str(dir);
            url
        })
}

/// Drop the last path segment of an absolute URL, never touching the origin.
fn pop_segment(url: &mut String) {
    let floor = url.find("://").map_or(0, |i| i + 3);
    if let Some(idx) = url[floor..].rfind('/') {
        url.truncate(floor + idx);
    }
}

/// Fetch and parse the manifest at `location`.
pub async fn load_manifest<F>(fetcher: &F, location: &str) -> Result<VersionManifest, SwitcherError>
where
    F: ManifestFetcher + ?Sized,
{
    debug!("Fetching version manifest from {}", location);
    let body = fetcher.fetch_manifest(location).await?;
    let manifest = VersionManifest::from_json(&body)?;
    debug!("Manifest lists {} versions", manifest.len());
    Ok(manifest)
}
