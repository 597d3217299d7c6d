//! Preview the options a page would render.
//!
//! Run with: `cargo run --example preview_options -- <page-url> <versions.json> [marker]`

use version_switcher::{
    SwitcherConfig, VersionManifest, build_options, current_version, resolve_base_path,
};

fn main() {
    let mut args = std::env::args().skip(1);
    let url = args
        .next()
        .unwrap_or_else(|| "https://example.org/cime/versions/master/html/index.html".into());
    let manifest_path = args.next().unwrap_or_else(|| "versions.json".into());
    let marker = args
        .next()
        .unwrap_or_else(|| SwitcherConfig::default().marker);

    let Some(base) = resolve_base_path(&url, &marker) else {
        eprintln!("Marker {:?} not found in {}", marker, url);
        std::process::exit(1);
    };

    let json = std::fs::read_to_string(&manifest_path).expect("Failed to read manifest");
    let manifest = VersionManifest::from_json(&json).expect("Failed to parse manifest");

    let suffix = SwitcherConfig::default().page_suffix;
    println!("Base path: {}", base);
    for entry in build_options(&base, &manifest, &suffix, current_version(&url, &base)) {
        let mark = if entry.selected { "*" } else { " " };
        println!("{} {:<24} {}", mark, entry.label, entry.value);
    }
}
