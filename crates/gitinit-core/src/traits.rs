//! Capability traits for the external collaborators.
//!
//! Each trait has one production implementation (file-backed credentials in
//! this crate, the GitHub client in `gitinit-github`, the git subprocess
//! wrapper in `gitinit-git`) and fakes in the step tests.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::GitInitError;

/// Source of the personal access token.
pub trait CredentialStore: Send + Sync {
    /// Load the token, trimmed of surrounding whitespace.
    fn load(&self) -> Result<String, GitInitError>;
}

/// Options applied when the remote creates the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOptions {
    /// Server-side .gitignore template applied to the initial commit.
    pub gitignore_template: String,

    /// Whether the remote creates an initial commit so the repository is
    /// immediately cloneable.
    pub auto_init: bool,
}

impl Default for RepositoryOptions {
    fn default() -> Self {
        Self {
            gitignore_template: "Node".to_string(),
            auto_init: true,
        }
    }
}

/// What the provider reports back about a freshly created repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRepository {
    /// Web URL of the repository.
    pub remote_url: String,

    /// SSH URL used for cloning.
    pub clone_url: String,

    /// Name the remote actually assigned.
    pub canonical_name: String,
}

/// Creates repositories on a hosted provider.
///
/// Not idempotent: a second call with the same name fails with a
/// name-conflict [`GitInitError::Provider`] error.
#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    async fn create_repository(
        &self,
        name: &str,
        token: &str,
        options: &RepositoryOptions,
    ) -> Result<CreatedRepository, GitInitError>;
}

/// Clones remote repositories onto the local filesystem.
#[async_trait]
pub trait SourceControl: Send + Sync {
    /// Clone `url` into the working directory, returning the created path.
    async fn clone_repository(&self, url: &str) -> Result<PathBuf, GitInitError>;
}
