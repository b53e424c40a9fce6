//! File-backed credential store.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::GitInitError;
use crate::traits::CredentialStore;

/// Personal access token stored as a plain-text file.
///
/// The default location is `~/.config/gitinit/pat`; the entire trimmed file
/// content is the token. Absence is a configuration error requiring user
/// action, so there is no retry.
#[derive(Debug, Clone)]
pub struct PatFile {
    path: PathBuf,
}

impl PatFile {
    /// Use the token file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the default location under the user's config directory.
    pub fn default_location() -> Result<Self, GitInitError> {
        let home = dirs::home_dir().ok_or(GitInitError::HomeDirUnavailable)?;
        Ok(Self::new(
            home.join(".config").join("gitinit").join("pat"),
        ))
    }

    /// Path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for PatFile {
    fn load(&self) -> Result<String, GitInitError> {
        if !self.path.exists() {
            return Err(GitInitError::CredentialNotFound {
                path: self.path.clone(),
            });
        }
        let content =
            std::fs::read_to_string(&self.path).map_err(|_| GitInitError::CredentialNotFound {
                path: self.path.clone(),
            })?;
        let token = content.trim();
        if token.is_empty() {
            return Err(GitInitError::CredentialEmpty {
                path: self.path.clone(),
            });
        }
        debug!(path = %self.path.display(), "Loaded personal access token");
        Ok(token.to_string())
    }
}
