//! Top-level subcommand handlers.
pub mod generate;
pub mod version;
