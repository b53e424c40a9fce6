//! Core domain errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by any step of the gitinit workflow.
///
/// Propagation is fail-fast: the first error aborts the remaining steps and
/// reaches the caller unchanged. Nothing here is retried internally.
#[derive(Debug, Error)]
pub enum GitInitError {
    /// No repository name was given (or it was all whitespace).
    #[error("missing repository name")]
    MissingArgument,

    /// The access token file does not exist.
    #[error("no personal access token file found at {}", .path.display())]
    CredentialNotFound { path: PathBuf },

    /// The access token file exists but trims to an empty string.
    #[error("personal access token file at {} is empty", .path.display())]
    CredentialEmpty { path: PathBuf },

    /// The user's home directory could not be resolved.
    #[error("could not determine the user home directory")]
    HomeDirUnavailable,

    /// The repository API rejected the creation call.
    #[error("repository creation failed: {status}::{message}")]
    Provider { status: u16, message: String },

    /// The transport failed before the repository API produced a status.
    ///
    /// Mapped from the HTTP client at the provider crate's seam so this
    /// crate stays free of network dependencies.
    #[error("HTTP error: {0}")]
    Http(String),

    /// `git clone` could not be spawned or exited non-zero.
    #[error("git clone failed: {message}")]
    Clone { message: String },

    /// A step read a context field its predecessors never wrote.
    ///
    /// Indicates a mis-ordered sequence, which is a programming error.
    #[error("context field '{field}' not populated; steps wired out of order")]
    ContextMissing { field: &'static str },
}

impl GitInitError {
    /// True for provider rejections that require re-running credential setup.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Provider { status: 401 | 403, .. })
    }

    /// True for provider rejections caused by an already-taken name.
    pub fn is_name_conflict(&self) -> bool {
        matches!(self, Self::Provider { status: 422, .. })
    }

    /// True for provider rejections that would succeed if retried later.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Provider { status: 429, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failure_statuses() {
        let unauthorized = GitInitError::Provider {
            status: 401,
            message: "Bad credentials".to_string(),
        };
        let forbidden = GitInitError::Provider {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert!(unauthorized.is_auth_failure());
        assert!(forbidden.is_auth_failure());
        assert!(!unauthorized.is_name_conflict());
    }

    #[test]
    fn test_name_conflict_status() {
        let conflict = GitInitError::Provider {
            status: 422,
            message: "name already exists on this account".to_string(),
        };
        assert!(conflict.is_name_conflict());
        assert!(!conflict.is_auth_failure());
        assert!(!conflict.is_rate_limited());
    }

    #[test]
    fn test_predicates_false_for_other_variants() {
        let clone = GitInitError::Clone {
            message: "boom".to_string(),
        };
        assert!(!clone.is_auth_failure());
        assert!(!clone.is_name_conflict());
        assert!(!clone.is_rate_limited());
    }

    #[test]
    fn test_provider_display_carries_status_and_message() {
        let err = GitInitError::Provider {
            status: 422,
            message: "name already exists on this account".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "repository creation failed: 422::name already exists on this account"
        );
    }
}
