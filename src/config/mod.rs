//! Run configuration resolved from CLI options and CI environment variables.
//!
//! The CLI layer is the only place that reads the process environment (via
//! clap's `env` fallbacks) or the current directory. Everything below it
//! receives an [`Inputs`] value, which keeps the generator deterministic in
//! tests.
pub mod flags;
pub mod repository;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::GenerateOpts;

pub use repository::RepoIdentity;

/// Main file written when `MAIN_FILE` is unset or empty.
pub const DEFAULT_MAIN_FILE: &str = "index.php";

/// Manifest file name, looked up in the project root.
pub const MANIFEST_FILE: &str = "composer.json";

/// Explicit configuration for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    /// Project directory holding `composer.json`; relative paths resolve here.
    pub root: PathBuf,
    /// Main file to write, as configured (relative to `root` unless absolute).
    pub main_file: String,
    /// Snippet inserted before the autoloader.
    pub prepend: Option<String>,
    /// Snippet inserted after the autoloader.
    pub append: Option<String>,
    /// Whether to ensure a fallback `screenshot.png`.
    pub fallback_screenshot: bool,
    /// Repository identity for the `GitHub URI` header.
    pub repository: Option<RepoIdentity>,
    /// File that receives step outputs; `None` falls back to workflow commands.
    pub output_file: Option<PathBuf>,
    /// Render and log the main file without touching the filesystem.
    pub dry_run: bool,
}

impl Inputs {
    /// Inputs rooted at `root` with every optional setting at its default.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            main_file: DEFAULT_MAIN_FILE.to_string(),
            prepend: None,
            append: None,
            fallback_screenshot: false,
            repository: None,
            output_file: None,
            dry_run: false,
        }
    }

    /// Build inputs from parsed `generate` options.
    ///
    /// Empty strings count as unset, matching how CI runners export inputs
    /// that were left blank.
    ///
    /// # Errors
    ///
    /// Returns an error if no root was given and the current directory cannot
    /// be determined.
    pub fn from_opts(opts: &GenerateOpts) -> Result<Self> {
        let root = match &opts.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("resolving current directory")?,
        };

        Ok(Self {
            root,
            main_file: non_empty(opts.main_file.as_deref())
                .unwrap_or(DEFAULT_MAIN_FILE)
                .to_string(),
            prepend: non_empty(opts.prepend.as_deref()).map(String::from),
            append: non_empty(opts.append.as_deref()).map(String::from),
            fallback_screenshot: flags::parse_bool_input(opts.fallback_screenshot.as_deref()),
            repository: opts.repository.as_deref().and_then(RepoIdentity::parse),
            output_file: opts.output_file.clone().filter(|p| !p.as_os_str().is_empty()),
            dry_run: opts.dry_run,
        })
    }

    /// Absolute (root-joined) path of the main file.
    #[must_use]
    pub fn main_file_path(&self) -> PathBuf {
        self.root.join(&self.main_file)
    }

    /// Path of `composer.json` in the project root.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// The project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn opts_with_root() -> GenerateOpts {
        GenerateOpts {
            root: Some(PathBuf::from("/project")),
            ..GenerateOpts::default()
        }
    }

    #[test]
    fn defaults_main_file_to_index_php() {
        let inputs = Inputs::from_opts(&opts_with_root()).unwrap();
        assert_eq!(inputs.main_file, "index.php");
        assert_eq!(inputs.main_file_path(), PathBuf::from("/project/index.php"));
    }

    #[test]
    fn empty_main_file_falls_back_to_default() {
        let opts = GenerateOpts {
            main_file: Some(String::new()),
            ..opts_with_root()
        };
        assert_eq!(Inputs::from_opts(&opts).unwrap().main_file, "index.php");
    }

    #[test]
    fn empty_snippets_count_as_unset() {
        let opts = GenerateOpts {
            prepend: Some(String::new()),
            append: Some("// after".to_string()),
            ..opts_with_root()
        };
        let inputs = Inputs::from_opts(&opts).unwrap();
        assert_eq!(inputs.prepend, None);
        assert_eq!(inputs.append.as_deref(), Some("// after"));
    }

    #[test]
    fn fallback_flag_is_coerced() {
        let on = GenerateOpts {
            fallback_screenshot: Some("1".to_string()),
            ..opts_with_root()
        };
        let off = GenerateOpts {
            fallback_screenshot: Some("off".to_string()),
            ..opts_with_root()
        };
        assert!(Inputs::from_opts(&on).unwrap().fallback_screenshot);
        assert!(!Inputs::from_opts(&off).unwrap().fallback_screenshot);
        assert!(!Inputs::from_opts(&opts_with_root()).unwrap().fallback_screenshot);
    }

    #[test]
    fn repository_is_parsed() {
        let opts = GenerateOpts {
            repository: Some("acme/plugin".to_string()),
            ..opts_with_root()
        };
        assert_eq!(
            Inputs::from_opts(&opts).unwrap().repository,
            Some(RepoIdentity::new("acme", "plugin"))
        );
    }

    #[test]
    fn manifest_path_is_in_root() {
        let inputs = Inputs::new("/project");
        assert_eq!(inputs.manifest_path(), PathBuf::from("/project/composer.json"));
    }

    #[test]
    fn missing_root_uses_current_directory() {
        let inputs = Inputs::from_opts(&GenerateOpts::default()).unwrap();
        assert_eq!(inputs.root, std::env::current_dir().unwrap());
    }
}
