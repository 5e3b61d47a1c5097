//! Command-line interface definition.
use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the main-file generator.
#[derive(Parser, Debug)]
#[command(
    name = "wp-main-file",
    about = "Generate a WordPress plugin or theme main file from composer.json",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output (`RUNNER_DEBUG=1` on a debug re-run)
    #[arg(
        short,
        long,
        global = true,
        env = "RUNNER_DEBUG",
        value_parser = FalseyValueParser::new()
    )]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the main file (and optional fallback screenshot)
    Generate(GenerateOpts),
    /// Print version information
    Version,
}

/// Options for the `generate` subcommand.
///
/// Every option falls back to the environment variable the CI step exports,
/// so the action can invoke the binary without arguments.
#[derive(Parser, Debug, Clone, Default)]
pub struct GenerateOpts {
    /// Main file to write; an extension ending in `css` selects a theme
    #[arg(long, env = "MAIN_FILE")]
    pub main_file: Option<String>,

    /// PHP inserted before the autoloader (plugins only)
    #[arg(long, env = "MAIN_FILE_PREPEND")]
    pub prepend: Option<String>,

    /// PHP inserted after the autoloader (plugins only)
    #[arg(long, env = "MAIN_FILE_APPEND")]
    pub append: Option<String>,

    /// Create screenshot.png when no screenshot exists (true/false/1/0/on/off…)
    #[arg(long, env = "FALLBACK_SCREENSHOT")]
    pub fallback_screenshot: Option<String>,

    /// Repository as `owner/repo`, used for the GitHub URI header
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// File that receives step outputs
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,

    /// Project directory containing composer.json (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Print the generated file instead of writing anything
    #[arg(short = 'd', long)]
    pub dry_run: bool,
}
