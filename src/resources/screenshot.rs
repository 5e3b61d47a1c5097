//! Placeholder `screenshot.png` for projects without a screenshot.
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{Resource, ResourceChange, ResourceState};
use crate::error::{MainFileError, ScreenshotError};
use crate::operations::{FileSystemOps, SystemFileSystemOps};

/// Extensions checked for an existing `screenshot.*`, in lookup order.
pub const SCREENSHOT_EXTENSIONS: [&str; 6] = ["png", "gif", "jpg", "jpeg", "webp", "avif"];

/// Base64 of a 1x1 grayscale PNG.
const PLACEHOLDER_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR4nGNgYAAAAAMAASsJTYQAAAAASUVORK5CYII=";

/// Decoded placeholder image bytes.
///
/// # Errors
///
/// Returns [`ScreenshotError::Decode`] if the embedded image is corrupt.
pub fn placeholder_png() -> Result<Vec<u8>, ScreenshotError> {
    Ok(STANDARD.decode(PLACEHOLDER_PNG_BASE64)?)
}

/// Ensures the project root holds some `screenshot.*`, writing the
/// placeholder as `screenshot.png` when none exists.
pub struct FallbackScreenshot {
    /// Project root searched for an existing screenshot.
    pub root: PathBuf,
    fs_ops: Arc<dyn FileSystemOps>,
}

impl std::fmt::Debug for FallbackScreenshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackScreenshot")
            .field("root", &self.root)
            .field("fs_ops", &"<dyn FileSystemOps>")
            .finish()
    }
}

impl FallbackScreenshot {
    /// Create the resource for `root` backed by the real filesystem.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_fs_ops(root, Arc::new(SystemFileSystemOps))
    }

    /// Create the resource for `root` backed by `fs_ops`.
    #[must_use]
    pub fn with_fs_ops(root: impl Into<PathBuf>, fs_ops: Arc<dyn FileSystemOps>) -> Self {
        Self {
            root: root.into(),
            fs_ops,
        }
    }

    /// Path of the placeholder written by [`apply`](Resource::apply).
    #[must_use]
    pub fn target(&self) -> PathBuf {
        self.root.join("screenshot.png")
    }

    /// First existing `screenshot.<ext>`, stopping at the first hit.
    #[must_use]
    pub fn existing(&self) -> Option<PathBuf> {
        SCREENSHOT_EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("screenshot.{ext}")))
            .find(|path| self.fs_ops.exists(path))
    }

    fn write_placeholder(&self, path: &Path) -> Result<(), ScreenshotError> {
        let bytes = placeholder_png()?;
        self.fs_ops
            .write(path, &bytes)
            .map_err(|source| ScreenshotError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl Resource for FallbackScreenshot {
    fn description(&self) -> String {
        self.target().display().to_string()
    }

    fn current_state(&self) -> Result<ResourceState, MainFileError> {
        Ok(if self.existing().is_some() {
            ResourceState::Correct
        } else {
            ResourceState::Missing
        })
    }

    fn apply(&self) -> Result<ResourceChange, MainFileError> {
        if self.existing().is_some() {
            return Ok(ResourceChange::AlreadyCorrect);
        }
        self.write_placeholder(&self.target())?;
        Ok(ResourceChange::Applied)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::operations::MockFileSystemOps;
    use mockall::Sequence;

    #[test]
    fn placeholder_is_a_png() {
        let bytes = placeholder_png().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(bytes.len(), 68);
    }

    #[test]
    fn writes_placeholder_when_no_screenshot_exists() {
        let mut fs = MockFileSystemOps::new();
        fs.expect_exists().times(6).return_const(false);
        fs.expect_write()
            .withf(|path: &Path, contents: &[u8]| {
                path == Path::new("/p/screenshot.png") && contents.starts_with(b"\x89PNG")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let shot = FallbackScreenshot::with_fs_ops("/p", Arc::new(fs));
        assert_eq!(shot.apply().unwrap(), ResourceChange::Applied);
    }

    #[test]
    fn lookup_stops_at_first_existing_screenshot() {
        let mut fs = MockFileSystemOps::new();
        let mut seq = Sequence::new();
        for (ext, found) in [("png", false), ("gif", false), ("jpg", true)] {
            let expected = PathBuf::from(format!("/p/screenshot.{ext}"));
            fs.expect_exists()
                .withf(move |path: &Path| path == expected)
                .times(1)
                .in_sequence(&mut seq)
                .return_const(found);
        }
        fs.expect_write().never();

        let shot = FallbackScreenshot::with_fs_ops("/p", Arc::new(fs));
        assert_eq!(shot.apply().unwrap(), ResourceChange::AlreadyCorrect);
    }

    #[test]
    fn state_reflects_existing_screenshot() {
        let mut fs = MockFileSystemOps::new();
        fs.expect_exists()
            .returning(|path: &Path| path.ends_with("screenshot.webp"));
        let shot = FallbackScreenshot::with_fs_ops("/p", Arc::new(fs));
        assert_eq!(shot.current_state().unwrap(), ResourceState::Correct);
        assert_eq!(shot.existing(), Some(PathBuf::from("/p/screenshot.webp")));
    }

    #[test]
    fn write_failure_names_the_path() {
        let mut fs = MockFileSystemOps::new();
        fs.expect_exists().return_const(false);
        fs.expect_write()
            .returning(|_, _| Err(std::io::Error::other("disk full")));
        let shot = FallbackScreenshot::with_fs_ops("/p", Arc::new(fs));
        let err = shot.apply().unwrap_err();
        assert!(err.to_string().contains("/p/screenshot.png"));
    }

    #[test]
    fn real_filesystem_keeps_existing_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("screenshot.jpeg"), b"jpeg").unwrap();

        let shot = FallbackScreenshot::new(dir.path());
        assert_eq!(shot.apply().unwrap(), ResourceChange::AlreadyCorrect);
        assert!(!dir.path().join("screenshot.png").exists());
    }
}
