//! One-shot initialization pipeline.
//!
//! ```text
//! base URI ──resolve──> base path ──mount──> <select> ──attach──> listener
//!                                                │
//!                        manifest <──fetch───────┘
//!                            │
//!                            └──build_options──> populate
//! ```
//!
//! Every failure is absorbed in [`VersionSwitcher::run`]: the widget either
//! appears populated or silently stays away, and nothing reaches the page.

use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::base_path::{current_version, resolve_base_path};
use crate::config::SwitcherConfig;
use crate::dom::Dom;
use crate::error::SwitcherError;
use crate::fetch::{ManifestFetcher, load_manifest, manifest_url};
use crate::navigation::{self, Navigator};
use crate::options::build_options;
use crate::render;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Selector rendered with this many options
    Populated { options: usize },
    /// Page URL has no marker segment; nothing was fetched or mutated
    Unresolved,
    /// Page has no mount container; nothing was fetched
    NoMount,
    /// Manifest could not be fetched or parsed; the selector stays empty
    ManifestUnavailable,
    /// Configuration rejected before anything happened
    Misconfigured,
    /// A DOM operation failed while rendering
    RenderFailed,
}

impl From<&SwitcherError> for Outcome {
    fn from(err: &SwitcherError) -> Self {
        match err {
            SwitcherError::Unresolved { .. } | SwitcherError::NoBaseUri => Outcome::Unresolved,
            SwitcherError::MountNotFound(_) => Outcome::NoMount,
            SwitcherError::Fetch(_) | SwitcherError::Manifest(_) => Outcome::ManifestUnavailable,
            SwitcherError::Config(_) => Outcome::Misconfigured,
            SwitcherError::Dom(_) => Outcome::RenderFailed,
        }
    }
}

/// The version switcher bound to a page.
pub struct VersionSwitcher<D, F, N: ?Sized> {
    config: SwitcherConfig,
    dom: D,
    fetcher: F,
    navigator: Rc<N>,
}

impl<D, F, N> VersionSwitcher<D, F, N>
where
    D: Dom,
    F: ManifestFetcher,
    N: Navigator + ?Sized + 'static,
{
    pub fn new(config: SwitcherConfig, dom: D, fetcher: F, navigator: Rc<N>) -> Self {
        Self {
            config,
            dom,
            fetcher,
            navigator,
        }
    }

    pub fn config(&self) -> &SwitcherConfig {
        &self.config
    }

    /// Resolve, mount, listen, fetch, populate.
    ///
    /// Meant to run once per page load. A second run replaces the mounted
    /// selector with a fresh one.
    pub async fn run(&self) -> Outcome {
        match self.try_run().await {
            Ok(options) => {
                info!("Version switcher ready with {} versions", options);
                Outcome::Populated { options }
            }
            Err(err) => {
                let outcome = Outcome::from(&err);
                match outcome {
                    Outcome::Unresolved | Outcome::NoMount => {
                        debug!("Version switcher skipped: {}", err)
                    }
                    _ => warn!("Version switcher unavailable: {}", err),
                }
                outcome
            }
        }
    }

    async fn try_run(&self) -> Result<usize, SwitcherError> {
        self.config.validate()?;

        let url = self.dom.base_uri().ok_or(SwitcherError::NoBaseUri)?;
        let base = resolve_base_path(&url, &self.config.marker).ok_or_else(|| {
            SwitcherError::Unresolved {
                url: url.clone(),
                marker: self.config.marker.clone(),
            }
        })?;
        let current = current_version(&url, &base);
        debug!("Resolved base path {} (current version: {:?})", base, current);

        let mounted = render::mount_selector(&self.dom, &self.config)?;
        navigation::attach(&self.dom, &mounted.select, Rc::clone(&self.navigator))?;

        let location = manifest_url(
            &base,
            &self.config.manifest_location,
            &self.config.page_suffix,
            current,
        );
        let manifest = match load_manifest(&self.fetcher, &location).await {
            Ok(manifest) => manifest,
            Err(err) => {
                if self.config.hide_on_failure {
                    if let Err(hide_err) = render::hide(&self.dom, &mounted.dropdown) {
                        warn!("Could not hide version switcher: {}", hide_err);
                    }
                }
                return Err(err);
            }
        };

        let entries = build_options(&base, &manifest, &self.config.page_suffix, current);
        Ok(render::populate(&self.dom, &mounted.select, &entries)?)
    }
}
