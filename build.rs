//! Build script: embeds the release version printed by `wp-main-file version`.
use std::process::Command;

const VERSION_VAR: &str = "WP_MAIN_FILE_VERSION";

fn main() {
    println!("cargo:rerun-if-env-changed={VERSION_VAR}");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    // Without either source the binary reports CARGO_PKG_VERSION.
    if let Some(version) = release_version().or_else(git_version) {
        println!("cargo:rustc-env={VERSION_VAR}={version}");
    }
}

/// Version handed in by the release workflow.
fn release_version() -> Option<String> {
    std::env::var(VERSION_VAR).ok().as_deref().and_then(normalize)
}

/// `git describe` of the checkout.
fn git_version() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|output| output.status.success())?;
    normalize(&String::from_utf8_lossy(&output.stdout))
}

/// Trim and drop a `v` tag prefix; blank input counts as no version.
fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let version = trimmed.strip_prefix('v').unwrap_or(trimmed);
    (!version.is_empty()).then(|| version.to_string())
}
