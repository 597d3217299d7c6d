//! # version-switcher
//!
//! Version selector for documentation sites that publish every release under
//! a shared root:
//!
//! ```text
//! https://example.org/proj/versions/versions.json
//! https://example.org/proj/versions/master/html/index.html
//! https://example.org/proj/versions/v1.0/html/index.html
//! ```
//!
//! On page load the switcher resolves the shared root from the page URL,
//! reads `versions.json`, renders a `<select>` with one option per version
//! and navigates to the chosen build when the reader picks one.
//!
//! ## Quick Start
//!
//! ```rust
//! use version_switcher::{build_options, resolve_base_path, VersionManifest};
//!
//! let base = resolve_base_path(
//!     "https://example.org/proj/versions/master/html/index.html",
//!     "proj/versions",
//! )
//! .unwrap();
//! let manifest =
//!     VersionManifest::from_json(r#"{"master": "latest", "v1.0": "1.0 (stable)"}"#).unwrap();
//!
//! let options = build_options(&base, &manifest, "html/index.html", Some("master"));
//! assert_eq!(options[1].value, "https://example.org/proj/versions/v1.0/html/index.html");
//! assert!(options[0].selected);
//! ```
//!
//! ## Architecture
//!
//! - [`base_path`] - shared-root resolution
//! - [`manifest`] - `versions.json` parsing
//! - [`options`] - option entries and navigation targets
//! - [`dom`], [`fetch`], [`navigation`] - host seams implemented by the browser crate
//! - [`render`] - selector markup
//! - [`switcher`] - the one-shot pipeline tying it together
//!
//! The crate has no browser dependency; `version-switcher-wasm` provides the
//! `web-sys` implementations of the host seams.

pub mod base_path;
pub mod config;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod manifest;
pub mod navigation;
pub mod options;
pub mod render;
pub mod switcher;

pub use base_path::{BasePath, current_version, resolve_base_path};
pub use config::SwitcherConfig;
pub use dom::{ChangeHandler, Dom};
pub use error::{ConfigError, DomError, FetchError, ManifestError, SwitcherError};
pub use fetch::ManifestFetcher;
pub use manifest::VersionManifest;
pub use navigation::Navigator;
pub use options::{OptionEntry, build_options, target_url};
pub use switcher::{Outcome, VersionSwitcher};
