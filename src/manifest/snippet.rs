//! PHP snippets injected around the autoloader.
use serde_json::Value;

use super::value::{header_text, render};

/// A snippet from `extra.main-file-prepend` / `extra.main-file-append`.
///
/// Composer authors may write either a single string or a list of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snippet {
    /// One block of text, used verbatim.
    Text(String),
    /// Lines joined with `\n`.
    Lines(Vec<String>),
}

impl Snippet {
    /// Read a snippet from its manifest value.
    ///
    /// A list becomes [`Snippet::Lines`] with each item rendered as text.
    /// Any other non-falsy value is rendered into [`Snippet::Text`]; falsy
    /// values yield `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(Self::Lines(items.iter().map(render).collect())),
            other => header_text(other).map(Self::Text),
        }
    }

    /// The snippet as a single block of text.
    #[must_use]
    pub fn normalize(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Lines(lines) => lines.join("\n"),
        }
    }

    /// Whether the snippet should be emitted at all.
    ///
    /// An empty string is skipped; a list is always emitted, even when empty.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Lines(_) => true,
        }
    }
}
