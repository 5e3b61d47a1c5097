//! Logging infrastructure for structured console output.

mod buffered;
mod logger;
mod subscriber;
mod types;

pub use buffered::{BufferedLog, LogEntry};
pub use logger::Logger;
pub use subscriber::init_subscriber;
pub use types::Log;

/// Tracing target for stage headers.
pub(crate) const STAGE_TARGET: &str = "wp_main_file::stage";

/// Tracing target for dry-run previews.
pub(crate) const DRY_RUN_TARGET: &str = "wp_main_file::dry_run";
