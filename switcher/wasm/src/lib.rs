//! Browser entry point for the documentation version switcher.
//!
//! Loading the module is enough: the start hook waits for the document to be
//! parsed, then runs the switcher once against the live page. The mount
//! container may override the defaults:
//!
//! ```html
//! <div class="version" data-marker="proj/versions" data-manifest="../../versions.json"></div>
//! ```
//!
//! A few pure helpers are exported as well, for pages that build their own UI.

pub mod browser;
pub mod logging;

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use version_switcher::{
    Dom, SwitcherConfig, VersionManifest, VersionSwitcher, build_options, current_version,
};

pub use browser::{BrowserDom, BrowserFetcher, BrowserNavigator};

/// Install panic hook and console logging, then schedule the switcher.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init();

    let Some(dom) = BrowserDom::current() else {
        tracing::debug!("No window/document; version switcher not started");
        return;
    };

    if dom.document().ready_state() == "loading" {
        let document = dom.document().clone();
        let on_ready = Closure::once_into_js(move || launch(dom));
        let listener: &js_sys::Function = on_ready.unchecked_ref();
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", listener) {
            tracing::warn!(
                "Could not wait for DOMContentLoaded: {}",
                browser::js_error(&err)
            );
        }
    } else {
        launch(dom);
    }
}

/// Run the switcher once, off the current call stack.
fn launch(dom: BrowserDom) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let config = config_from_page(&dom, SwitcherConfig::default());
    let switcher = VersionSwitcher::new(
        config,
        dom,
        BrowserFetcher::new(window.clone()),
        Rc::new(BrowserNavigator::new(window)),
    );

    wasm_bindgen_futures::spawn_local(async move {
        let outcome = switcher.run().await;
        tracing::debug!("Version switcher finished: {:?}", outcome);
    });
}

/// Apply `data-*` overrides found on the mount container.
pub fn config_from_page(dom: &BrowserDom, mut config: SwitcherConfig) -> SwitcherConfig {
    let Some(mount) = dom.query_selector(&config.mount_selector) else {
        return config;
    };
    if let Some(marker) = mount.get_attribute("data-marker") {
        config = config.with_marker(marker);
    }
    if let Some(location) = mount.get_attribute("data-manifest") {
        config = config.with_manifest_location(location);
    }
    if mount.has_attribute("data-hide-on-failure") {
        config.hide_on_failure = true;
    }
    config
}

// ============================================================================
// WASM Exports
// ============================================================================

/// Base path of `url` for `marker`, or `undefined` when the marker is absent.
#[wasm_bindgen]
pub fn resolve_base_path(url: &str, marker: &str) -> Option<String> {
    version_switcher::resolve_base_path(url, marker).map(|base| base.into_string())
}

/// Option entries for a page as a JSON array of `{value, label, selected}`.
///
/// # Arguments
/// * `page_url` - Absolute URL of the page
/// * `marker` - Marker segment
/// * `manifest_json` - Contents of `versions.json`
#[wasm_bindgen]
pub fn option_targets(page_url: &str, marker: &str, manifest_json: &str) -> Result<String, JsValue> {
    options_json(page_url, marker, manifest_json).map_err(|e| JsValue::from_str(&e))
}

/// Check if WASM module is loaded and functional.
#[wasm_bindgen]
pub fn health_check() -> String {
    format!("version-switcher-wasm v{} ready", env!("CARGO_PKG_VERSION"))
}

fn options_json(page_url: &str, marker: &str, manifest_json: &str) -> Result<String, String> {
    let base = version_switcher::resolve_base_path(page_url, marker)
        .ok_or_else(|| format!("Marker {:?} not found in {:?}", marker, page_url))?;
    let manifest = VersionManifest::from_json(manifest_json)
        .map_err(|e| format!("Failed to parse manifest: {}", e))?;

    let suffix = SwitcherConfig::default().page_suffix;
    let entries = build_options(
        &base,
        &manifest,
        &suffix,
        current_version(page_url, &base),
    );
    serde_json::to_string(&entries).map_err(|e| format!("Failed to serialize options: {}", e))
}
