//! Plugin/theme classification from the main file name.
use std::fmt;
use std::path::Path;

/// What kind of WordPress package the main file bootstraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactType {
    /// A plugin: PHP main file with preamble, guard and autoloader.
    Plugin,
    /// A theme: `style.css` style header only.
    Theme,
}

impl ArtifactType {
    /// Classify a main file by its extension.
    ///
    /// Any extension ending in `css` (case-sensitive, so `xcss` counts too)
    /// is a theme; everything else, including no extension, is a plugin.
    ///
    /// # Examples
    ///
    /// ```
    /// use wp_main_file::header::ArtifactType;
    ///
    /// assert_eq!(ArtifactType::classify("style.css"), ArtifactType::Theme);
    /// assert_eq!(ArtifactType::classify("index.php"), ArtifactType::Plugin);
    /// ```
    #[must_use]
    pub fn classify(main_file: impl AsRef<Path>) -> Self {
        let is_css = main_file
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.ends_with("css"));
        if is_css { Self::Theme } else { Self::Plugin }
    }

    /// Prefix used by the type-specific header keys (`Plugin Name`, `Theme URI`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Plugin => "Plugin",
            Self::Theme => "Theme",
        }
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
