//! Serialization of a [`HeaderSet`] into main-file content.
//!
//! Layout for a plugin:
//!
//! ```text
//! <?php
//!
//! /**
//!  * Plugin Name: acme/plugin
//!  * Version: 1.2.0
//!  */
//!
//! <manifest prepend>
//!
//! <environment prepend>
//!
//! defined( 'ABSPATH' ) || exit;
//!
//! require __DIR__ . '/vendor/autoload.php';
//!
//! <environment append>
//!
//! <manifest append>
//! ```
//!
//! A theme gets only the comment block.
pub mod parse;

use crate::header::{ArtifactType, HeaderSet};
use crate::manifest::Snippet;

pub use parse::parse_header_block;

/// Opening tag written at the top of plugin files.
pub const PHP_OPEN_TAG: &str = "<?php";

/// Stops the file from executing outside WordPress.
pub const ACCESS_GUARD: &str = "defined( 'ABSPATH' ) || exit;";

/// Loads composer's autoloader.
pub const AUTOLOAD_REQUIRE: &str = "require __DIR__ . '/vendor/autoload.php';";

/// Snippets injected around the autoloader of a plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snippets {
    /// `extra.main-file-prepend` from the manifest.
    pub manifest_prepend: Option<Snippet>,
    /// Prepend snippet from the environment.
    pub env_prepend: Option<String>,
    /// Append snippet from the environment.
    pub env_append: Option<String>,
    /// `extra.main-file-append` from the manifest.
    pub manifest_append: Option<Snippet>,
}

/// Render the full main-file content.
///
/// Snippets are ignored for themes.
#[must_use]
pub fn render(headers: &HeaderSet, artifact: ArtifactType, snippets: &Snippets) -> String {
    let mut content = String::new();

    if artifact == ArtifactType::Plugin {
        content.push_str(PHP_OPEN_TAG);
        content.push_str("\n\n");
    }

    content.push_str(&render_header_block(headers));
    content.push('\n');

    if artifact == ArtifactType::Plugin {
        let mut block = |text: &str| {
            content.push_str(text);
            content.push_str("\n\n");
        };

        if let Some(snippet) = snippets.manifest_prepend.as_ref().filter(|s| s.is_present()) {
            block(&snippet.normalize());
        }
        if let Some(text) = snippets.env_prepend.as_deref().filter(|t| !t.is_empty()) {
            block(text);
        }
        block(ACCESS_GUARD);
        block(AUTOLOAD_REQUIRE);
        if let Some(text) = snippets.env_append.as_deref().filter(|t| !t.is_empty()) {
            block(text);
        }
        if let Some(snippet) = snippets.manifest_append.as_ref().filter(|s| s.is_present()) {
            block(&snippet.normalize());
        }
    }

    content
}

/// Render only the `/** ... */` comment block, one line per non-empty header.
#[must_use]
pub fn render_header_block(headers: &HeaderSet) -> String {
    let mut block = String::from("/**\n");
    for (key, value) in headers.non_empty() {
        block.push_str(&format!(" * {key}: {value}\n"));
    }
    block.push_str(" */\n");
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> HeaderSet {
        [("Plugin Name", "acme/plugin"), ("Plugin URI", ""), ("Version", "1.2.0")]
            .into_iter()
            .collect()
    }

    #[test]
    fn plugin_starts_with_open_tag_and_blank_line() {
        let out = render(&headers(), ArtifactType::Plugin, &Snippets::default());
        assert!(out.starts_with("<?php\n\n/**\n"));
    }

    #[test]
    fn empty_headers_are_omitted() {
        let out = render_header_block(&headers());
        assert_eq!(out, "/**\n * Plugin Name: acme/plugin\n * Version: 1.2.0\n */\n");
    }

    #[test]
    fn plugin_has_guard_then_loader() {
        let out = render(&headers(), ArtifactType::Plugin, &Snippets::default());
        assert!(out.ends_with(
            " */\n\ndefined( 'ABSPATH' ) || exit;\n\nrequire __DIR__ . '/vendor/autoload.php';\n\n"
        ));
    }

    #[test]
    fn theme_has_only_the_comment_block() {
        let snippets = Snippets {
            env_prepend: Some("// never".to_string()),
            manifest_append: Some(Snippet::Text("// never".to_string())),
            ..Snippets::default()
        };
        let out = render(&headers(), ArtifactType::Theme, &snippets);
        assert_eq!(
            out,
            "/**\n * Plugin Name: acme/plugin\n * Version: 1.2.0\n */\n\n"
        );
    }

    #[test]
    fn snippets_surround_the_loader_in_order() {
        let snippets = Snippets {
            manifest_prepend: Some(Snippet::Lines(vec!["// m1".to_string(), "// m2".to_string()])),
            env_prepend: Some("// env before".to_string()),
            env_append: Some("// env after".to_string()),
            manifest_append: Some(Snippet::Text("// manifest after".to_string())),
        };
        let out = render(&HeaderSet::new(), ArtifactType::Plugin, &snippets);
        assert_eq!(
            out,
            "<?php\n\n/**\n */\n\n\
             // m1\n// m2\n\n\
             // env before\n\n\
             defined( 'ABSPATH' ) || exit;\n\n\
             require __DIR__ . '/vendor/autoload.php';\n\n\
             // env after\n\n\
             // manifest after\n\n"
        );
    }

    #[test]
    fn empty_snippets_are_skipped() {
        let snippets = Snippets {
            manifest_prepend: Some(Snippet::Text(String::new())),
            env_append: Some(String::new()),
            ..Snippets::default()
        };
        let plain = render(&headers(), ArtifactType::Plugin, &Snippets::default());
        assert_eq!(render(&headers(), ArtifactType::Plugin, &snippets), plain);
    }
}
