//! Repository identity supplied by the CI environment.
use std::fmt;

/// The `owner/repo` pair of the repository being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoIdentity {
    /// Account or organisation that owns the repository.
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl RepoIdentity {
    /// Create an identity from its parts.
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parse a `GITHUB_REPOSITORY`-style `owner/repo` string.
    ///
    /// Returns `None` when the value has no `/` or either side is empty.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let (owner, repo) = value.trim().split_once('/')?;
        if owner.is_empty() || repo.is_empty() {
            return None;
        }
        Some(Self::new(owner, repo))
    }
}

impl fmt::Display for RepoIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
