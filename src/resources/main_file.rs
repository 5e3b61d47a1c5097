//! The generated plugin/theme main file.
use std::path::PathBuf;
use std::sync::Arc;

use super::{Resource, ResourceChange, ResourceState};
use crate::error::{EmitError, MainFileError};
use crate::operations::{FileSystemOps, SystemFileSystemOps};

/// A main file that must hold exactly `content`.
///
/// [`apply`](Resource::apply) always writes, replacing whatever is at the
/// path without asking.
pub struct MainFile {
    /// Target path.
    pub path: PathBuf,
    /// Desired file content.
    pub content: String,
    fs_ops: Arc<dyn FileSystemOps>,
}

impl std::fmt::Debug for MainFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainFile")
            .field("path", &self.path)
            .field("content", &format_args!("<{} bytes>", self.content.len()))
            .field("fs_ops", &"<dyn FileSystemOps>")
            .finish()
    }
}

impl MainFile {
    /// Create a main-file resource backed by the real filesystem.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::with_fs_ops(path, content, Arc::new(SystemFileSystemOps))
    }

    /// Create a main-file resource backed by `fs_ops`.
    #[must_use]
    pub fn with_fs_ops(
        path: impl Into<PathBuf>,
        content: impl Into<String>,
        fs_ops: Arc<dyn FileSystemOps>,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            fs_ops,
        }
    }
}

impl Resource for MainFile {
    fn description(&self) -> String {
        self.path.display().to_string()
    }

    fn current_state(&self) -> Result<ResourceState, MainFileError> {
        if !self.fs_ops.exists(&self.path) {
            return Ok(ResourceState::Missing);
        }
        let current = self.fs_ops.read(&self.path).map_err(|source| EmitError::Read {
            path: self.path.clone(),
            source,
        })?;
        if current == self.content.as_bytes() {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Incorrect {
                current: format!("{} bytes", current.len()),
            })
        }
    }

    fn apply(&self) -> Result<ResourceChange, MainFileError> {
        self.fs_ops
            .write(&self.path, self.content.as_bytes())
            .map_err(|source| EmitError::Write {
                path: self.path.clone(),
                source,
            })?;
        Ok(ResourceChange::Applied)
    }
}
