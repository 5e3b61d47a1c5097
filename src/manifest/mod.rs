//! The `composer.json` package manifest.
//!
//! Only the fields the generator consumes are modelled, and each is kept as
//! raw JSON. A field of an unexpected type behaves as if it were absent or is
//! rendered as text, never as a parse error; a manifest of `{}` (or any
//! non-object JSON value) is valid and yields empty headers. Key order inside
//! `extra.wordpress` is preserved because it decides the order of
//! override-only header lines.
pub mod snippet;
pub mod value;

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

use crate::error::ManifestError;
use crate::operations::{FileSystemOps, SystemFileSystemOps};

pub use snippet::Snippet;
pub use value::header_text;

/// Parsed `composer.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Manifest {
    name: Option<Value>,
    version: Option<Value>,
    description: Option<Value>,
    homepage: Option<Value>,
    license: Option<Value>,
    authors: Option<Value>,
    require: Option<Value>,
    extra: Option<Value>,
}

impl Manifest {
    /// Parse manifest JSON.
    ///
    /// # Errors
    ///
    /// Returns the parser error if `content` is not valid JSON.
    pub fn parse(content: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Value>(content)? {
            object @ Value::Object(_) => Self::deserialize(object),
            _ => Ok(Self::default()),
        }
    }

    /// Package name, usually `vendor/project`.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.name.as_ref().and_then(header_text)
    }

    /// Package version.
    #[must_use]
    pub fn version(&self) -> Option<String> {
        self.version.as_ref().and_then(header_text)
    }

    /// One-line description.
    #[must_use]
    pub fn description(&self) -> Option<String> {
        self.description.as_ref().and_then(header_text)
    }

    /// Project homepage.
    #[must_use]
    pub fn homepage(&self) -> Option<String> {
        self.homepage.as_ref().and_then(header_text)
    }

    /// License identifier; a list of identifiers renders comma-joined.
    #[must_use]
    pub fn license(&self) -> Option<String> {
        self.license.as_ref().and_then(header_text)
    }

    fn first_author(&self) -> Option<&Value> {
        self.authors.as_ref()?.as_array()?.first()
    }

    /// Name of the first listed author.
    #[must_use]
    pub fn author_name(&self) -> Option<String> {
        self.first_author()?.get("name").and_then(header_text)
    }

    /// Homepage of the first listed author.
    #[must_use]
    pub fn author_homepage(&self) -> Option<String> {
        self.first_author()?.get("homepage").and_then(header_text)
    }

    /// The `require.php` version constraint; a bare number counts too.
    #[must_use]
    pub fn php_constraint(&self) -> Option<String> {
        match self.require.as_ref()?.get("php")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.as_ref()?.get(key)
    }

    /// The `extra.wordpress` override block; absent unless it is an object.
    #[must_use]
    pub fn overrides(&self) -> Option<&Map<String, Value>> {
        self.extra("wordpress")?.as_object()
    }

    /// The `extra.main-file-prepend` snippet, if present.
    #[must_use]
    pub fn prepend_snippet(&self) -> Option<Snippet> {
        self.extra("main-file-prepend").and_then(Snippet::from_value)
    }

    /// The `extra.main-file-append` snippet, if present.
    #[must_use]
    pub fn append_snippet(&self) -> Option<Snippet> {
        self.extra("main-file-append").and_then(Snippet::from_value)
    }

    /// Last `/`-separated segment of the package name, or `""` without a name.
    ///
    /// # Examples
    ///
    /// ```
    /// use wp_main_file::manifest::Manifest;
    ///
    /// let m = Manifest::parse(br#"{"name": "acme/plugin"}"#).unwrap();
    /// assert_eq!(m.project_name(), "plugin");
    /// assert_eq!(Manifest::default().project_name(), "");
    /// ```
    #[must_use]
    pub fn project_name(&self) -> String {
        self.name()
            .and_then(|n| n.rsplit('/').next().map(String::from))
            .unwrap_or_default()
    }
}

/// Read and parse the manifest at `path` from the real filesystem.
///
/// # Errors
///
/// See [`load_with`].
pub fn load(path: &Path) -> Result<Manifest, ManifestError> {
    load_with(path, &SystemFileSystemOps)
}

/// Read the manifest at `path` through `fs_ops` and parse it.
///
/// # Errors
///
/// Returns [`ManifestError::Io`] if the file cannot be read and
/// [`ManifestError::Parse`] if it is not valid JSON.
pub fn load_with(path: &Path, fs_ops: &dyn FileSystemOps) -> Result<Manifest, ManifestError> {
    let content = fs_ops.read(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Manifest::parse(&content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
