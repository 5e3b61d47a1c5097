//! Header resolution: manifest fields plus overrides into an ordered
//! [`HeaderSet`].
//!
//! Every canonical key is resolved with the precedence
//! *override → manifest-derived default → empty*. Override keys that are not
//! canonical are appended afterwards in manifest order. The legacy
//! `Tested up to` / `Tested` aliases only ever feed `Compatible up to`.
pub mod artifact;
pub mod php_version;
pub mod set;

use serde_json::{Map, Value};

use crate::config::RepoIdentity;
use crate::manifest::Manifest;
use crate::manifest::value::header_text;

pub use artifact::ArtifactType;
pub use set::HeaderSet;

/// Canonical key that the legacy aliases resolve into.
pub const COMPATIBLE_UP_TO: &str = "Compatible up to";

/// Legacy spellings of [`COMPATIBLE_UP_TO`], in precedence order.
pub const LEGACY_COMPATIBLE_ALIASES: [&str; 2] = ["Tested up to", "Tested"];

/// The override block rendered to header text, in manifest order.
///
/// Falsy override values (`null`, `false`, `0`, `""`) are kept as `None` so
/// they fall through to derived defaults but still occupy their position
/// when appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    entries: Vec<(String, Option<String>)>,
}

impl Overrides {
    /// Render an `extra.wordpress` map.
    #[must_use]
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            entries: map
                .iter()
                .map(|(k, v)| (k.clone(), header_text(v)))
                .collect(),
        }
    }

    /// Overrides of `manifest`, empty when the block is absent.
    #[must_use]
    pub fn from_manifest(manifest: &Manifest) -> Self {
        manifest.overrides().map(Self::from_map).unwrap_or_default()
    }

    /// The non-falsy override for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// `Compatible up to`, falling back through the legacy aliases.
    #[must_use]
    pub fn compatible_up_to(&self) -> Option<&str> {
        std::iter::once(COMPATIBLE_UP_TO)
            .chain(LEGACY_COMPATIBLE_ALIASES)
            .find_map(|key| self.get(key))
    }

    /// Entries whose key is not in `excluded` and is not a legacy alias.
    pub fn remaining<'a>(
        &'a self,
        excluded: &'a [String],
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| {
                !excluded.iter().any(|e| e == k)
                    && !LEGACY_COMPATIBLE_ALIASES.contains(&k.as_str())
            })
            .map(|(k, v)| (k.as_str(), v.as_deref().unwrap_or_default()))
    }
}

/// Canonical header keys for `artifact`, in output order.
#[must_use]
pub fn canonical_keys(artifact: ArtifactType) -> Vec<String> {
    let label = artifact.label();
    let mut keys = vec![format!("{label} Name"), format!("{label} URI")];
    keys.extend(
        [
            "Version",
            "Description",
            "Author",
            "Author URI",
            "GitHub URI",
            "Remote File",
            "Release Asset",
            "Remote Visibility",
            "Requires PHP",
            "Requires at least",
            COMPATIBLE_UP_TO,
            "License",
            "License URI",
        ]
        .map(String::from),
    );
    keys
}

/// Resolve the ordered header set for `manifest`.
///
/// `GitHub URI` always comes from `repository` and is empty (and therefore
/// omitted) when the identity is unknown.
#[must_use]
pub fn resolve(
    manifest: &Manifest,
    artifact: ArtifactType,
    repository: Option<&RepoIdentity>,
) -> HeaderSet {
    let overrides = Overrides::from_manifest(manifest);
    let keys = canonical_keys(artifact);

    let label = artifact.label();
    let name_key = format!("{label} Name");
    let uri_key = format!("{label} URI");

    let or_default = |key: &str, derived: Option<String>| -> String {
        overrides
            .get(key)
            .map(String::from)
            .or(derived)
            .unwrap_or_default()
    };

    let mut headers = HeaderSet::new();
    for key in keys.iter().map(String::as_str) {
        let value = match key {
            k if k == name_key => or_default(k, manifest.name()),
            k if k == uri_key => or_default(k, manifest.homepage()),
            "Version" => or_default(key, manifest.version()),
            "Description" => or_default(key, manifest.description()),
            "Author" => or_default(key, manifest.author_name()),
            "Author URI" => or_default(key, manifest.author_homepage()),
            "GitHub URI" => repository.map(ToString::to_string).unwrap_or_default(),
            "Requires PHP" => or_default(
                key,
                manifest
                    .php_constraint()
                    .as_deref()
                    .and_then(php_version::requires_php),
            ),
            COMPATIBLE_UP_TO => overrides
                .compatible_up_to()
                .map(String::from)
                .unwrap_or_default(),
            "License" => or_default(key, manifest.license()),
            _ => or_default(key, None),
        };
        headers.insert(key, value);
    }

    for (key, value) in overrides.remaining(&keys) {
        headers.insert(key, value);
    }

    headers
}
