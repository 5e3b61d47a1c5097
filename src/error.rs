//! Domain-specific error types for main-file generation.
//!
//! Library modules return the typed errors below; command handlers at the
//! CLI boundary convert them to [`anyhow::Error`] via the standard `?`
//! operator and a single handler in `main` reports the chain as a CI failure.
//!
//! # Error hierarchy
//!
//! ```text
//! MainFileError
//! ├── Manifest(ManifestError)       composer.json missing or malformed
//! ├── Emit(EmitError)               reading or writing the main file
//! └── Screenshot(ScreenshotError)   decoding or writing the placeholder
//!
//! OutputError                       writing CI step outputs
//! ```
//!
//! [`OutputError`] stands alone: it is raised by the step-output sink, which
//! the generate command reports with its own context.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for main-file generation.
#[derive(Error, Debug)]
pub enum MainFileError {
    /// The package manifest could not be loaded.
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// The generated main file could not be read or written.
    #[error("Emit error: {0}")]
    Emit(#[from] EmitError),

    /// The fallback screenshot could not be created.
    #[error("Screenshot error: {0}")]
    Screenshot(#[from] ScreenshotError),
}

/// Errors that arise while loading `composer.json`.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("IO error reading manifest {}: {source}", path.display())]
    Io {
        /// Path to the manifest.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The manifest is not valid JSON or has an unexpected shape.
    #[error("Invalid manifest {}: {source}", path.display())]
    Parse {
        /// Path to the manifest.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
}

/// Errors that arise while reading or writing the generated main file.
#[derive(Error, Debug)]
pub enum EmitError {
    /// The existing main file could not be read for comparison.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The main file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise while ensuring the fallback screenshot.
#[derive(Error, Debug)]
pub enum ScreenshotError {
    /// The embedded placeholder image is not valid base64.
    #[error("Invalid placeholder image: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The placeholder image could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise while recording CI step outputs.
#[derive(Error, Debug)]
pub enum OutputError {
    /// The output file could not be opened or appended to.
    #[error("Failed to write output '{name}' to {}: {source}", path.display())]
    Write {
        /// Output name.
        name: String,
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The output name or value collides with the heredoc delimiter.
    #[error("Unexpected input: output '{name}' contains delimiter {delimiter}")]
    DelimiterCollision {
        /// Output name.
        name: String,
        /// Delimiter that was found in the name or value.
        delimiter: String,
    },
}
