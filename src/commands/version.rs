//! Command: print version information.

/// The version embedded at build time, falling back to the crate version.
#[must_use]
pub const fn version() -> &'static str {
    match option_env!("WP_MAIN_FILE_VERSION") {
        Some(version) => version,
        None => env!("CARGO_PKG_VERSION"),
    }
}

/// Print the wp-main-file version to stdout.
#[allow(clippy::print_stdout)]
pub fn run() {
    println!("wp-main-file {}", version());
}
