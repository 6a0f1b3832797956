//! Build script for The Freezer Door
//!
//! Stamps a build number and UTC timestamp into both binaries.

use std::fs;
use std::path::Path;

const BUILD_NUMBER_FILE: &str = "build_number.txt";

/// Previous build number from the counter file, or 0 when it is missing or unreadable
fn previous_build(path: &Path) -> u64 {
    fs::read_to_string(path)
        .ok()
        .and_then(|contents| contents.trim().parse().ok())
        .unwrap_or(0)
}

fn main() {
    // Rebuild metadata only when sources change
    println!("cargo:rerun-if-changed=src");

    let counter = Path::new(BUILD_NUMBER_FILE);
    let build_number = previous_build(counter) + 1;
    fs::write(counter, build_number.to_string()).expect("Failed to write build number file");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");

    println!("cargo:rustc-env=FREEZER_DOOR_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=FREEZER_DOOR_BUILD_TIMESTAMP={}", timestamp);
}
