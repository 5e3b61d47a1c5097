//! WordPress main-file generator.
//!
//! Builds the bootstrap file of a WordPress plugin (`index.php`) or theme
//! (`style.css`) from a package's `composer.json`, for use inside a CI
//! pipeline. The header comment block is derived from manifest fields and
//! `extra.wordpress` overrides; plugins additionally get an access guard,
//! composer's autoloader, and optional snippets around it.
//!
//! The public API is organised into layers:
//!
//! - **[`config`]**: explicit run [`Inputs`](config::Inputs) built from CLI options
//! - **[`manifest`]**: the `composer.json` model
//! - **[`header`]**: header resolution and plugin/theme classification
//! - **[`emit`]**: rendering (and re-parsing) the main file
//! - **[`resources`]**: idempotent `check + apply` file writers
//! - **[`commands`]**: subcommand orchestration (`generate`, `version`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod actions;
pub mod cli;
pub mod commands;
pub mod config;
pub mod emit;
pub mod error;
pub mod header;
pub mod logging;
pub mod manifest;
pub mod operations;
pub mod resources;
