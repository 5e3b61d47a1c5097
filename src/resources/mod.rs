//! Idempotent file resources (check + apply pattern).
pub mod main_file;
pub mod screenshot;

use crate::error::MainFileError;

pub use main_file::MainFile;
pub use screenshot::FallbackScreenshot;

/// State of a resource on disk.
///
/// # Examples
///
/// ```
/// use wp_main_file::resources::ResourceState;
///
/// let missing = ResourceState::Missing;
/// let wrong = ResourceState::Incorrect { current: "12 bytes".into() };
///
/// assert_ne!(missing, ResourceState::Correct);
/// assert_ne!(wrong, missing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Resource does not exist.
    Missing,
    /// Resource exists and matches the desired state.
    Correct,
    /// Resource exists but does not match the desired state.
    Incorrect {
        /// Short description of what is there now.
        current: String,
    },
}

/// Result of applying a resource change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// Resource was created or overwritten.
    Applied,
    /// Resource was already correct (no change made).
    AlreadyCorrect,
}

/// Unified interface for resources that can be checked and applied.
///
/// A dry run only calls [`current_state`](Self::current_state); a real run
/// only calls [`apply`](Self::apply), which does its own checking.
pub trait Resource {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Check the current state of the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined due to I/O failures.
    fn current_state(&self) -> Result<ResourceState, MainFileError>;

    /// Bring the resource to its desired state.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be written.
    fn apply(&self) -> Result<ResourceChange, MainFileError>;
}
