//! The shared mutable context threaded through one sequence run.

use std::path::PathBuf;

use crate::error::GitInitError;

/// State accumulated across a single workflow run.
///
/// Constructed with the validated repository name; every other field is
/// written by exactly one step and read by later ones. The sequencer owns
/// the context exclusively for the duration of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    /// Requested repository name (validated non-empty).
    pub repo_name: String,

    /// Personal access token, set by the credential step.
    pub token: Option<String>,

    /// SSH clone URL, set by the repository-creation step.
    pub clone_url: Option<String>,

    /// Web URL of the created repository, set by the repository-creation step.
    pub remote_url: Option<String>,

    /// Name the remote actually assigned, set by the repository-creation step.
    pub canonical_name: Option<String>,

    /// Local directory the repository was cloned into, set by the clone step.
    pub local_path: Option<PathBuf>,
}

impl Context {
    /// Create a context for the given repository name.
    ///
    /// Fails with [`GitInitError::MissingArgument`] when the name trims to
    /// an empty string, before any step of the sequence can start.
    pub fn new(repo_name: impl Into<String>) -> Result<Self, GitInitError> {
        let repo_name = repo_name.into().trim().to_string();
        if repo_name.is_empty() {
            return Err(GitInitError::MissingArgument);
        }
        Ok(Self {
            repo_name,
            ..Self::default()
        })
    }

    /// Token written by the credential step.
    pub fn token(&self) -> Result<&str, GitInitError> {
        self.token
            .as_deref()
            .ok_or(GitInitError::ContextMissing { field: "token" })
    }

    /// Clone URL written by the repository-creation step.
    pub fn clone_url(&self) -> Result<&str, GitInitError> {
        self.clone_url
            .as_deref()
            .ok_or(GitInitError::ContextMissing { field: "clone_url" })
    }

    /// Local path written by the clone step.
    pub fn local_path(&self) -> Result<&std::path::Path, GitInitError> {
        self.local_path
            .as_deref()
            .ok_or(GitInitError::ContextMissing { field: "local_path" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            Context::new(""),
            Err(GitInitError::MissingArgument)
        ));
        assert!(matches!(
            Context::new("   \n"),
            Err(GitInitError::MissingArgument)
        ));
    }

    #[test]
    fn test_name_is_trimmed() {
        let ctx = Context::new(" my-app\n").unwrap();
        assert_eq!(ctx.repo_name, "my-app");
        assert_eq!(ctx.token, None);
    }

    #[test]
    fn test_unpopulated_fields_are_context_errors() {
        let ctx = Context::new("my-app").unwrap();
        assert!(matches!(
            ctx.token(),
            Err(GitInitError::ContextMissing { field: "token" })
        ));
        assert!(matches!(
            ctx.clone_url(),
            Err(GitInitError::ContextMissing { field: "clone_url" })
        ));
    }
}
