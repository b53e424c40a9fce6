//! The three concrete workflow steps.
//!
//! Each step pulls its collaborator in through a capability trait, reads
//! what it needs from the shared [`Context`] and writes its results back
//! for the steps after it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::context::Context;
use crate::error::GitInitError;
use crate::step::Step;
use crate::traits::{CredentialStore, RepositoryOptions, RepositoryProvider, SourceControl};

/// Reads the personal access token into the context.
pub struct FetchToken {
    store: Arc<dyn CredentialStore>,
}

impl FetchToken {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Step for FetchToken {
    fn title(&self) -> String {
        "Fetching access token".to_string()
    }

    async fn run(&self, ctx: &mut Context) -> Result<Option<String>, GitInitError> {
        let token = self.store.load()?;
        ctx.token = Some(token);
        Ok(None)
    }
}

/// Creates the remote repository and records its URLs.
pub struct CreateRemoteRepo {
    provider: Arc<dyn RepositoryProvider>,
    options: RepositoryOptions,
}

impl CreateRemoteRepo {
    pub fn new(provider: Arc<dyn RepositoryProvider>, options: RepositoryOptions) -> Self {
        Self { provider, options }
    }
}

#[async_trait]
impl Step for CreateRemoteRepo {
    fn title(&self) -> String {
        "Creating remote repository".to_string()
    }

    async fn run(&self, ctx: &mut Context) -> Result<Option<String>, GitInitError> {
        let token = ctx.token()?.to_string();
        let created = self
            .provider
            .create_repository(&ctx.repo_name, &token, &self.options)
            .await?;

        let title = format!("Remote repository created at {}", created.remote_url);
        ctx.remote_url = Some(created.remote_url);
        ctx.clone_url = Some(created.clone_url);
        ctx.canonical_name = Some(created.canonical_name);
        Ok(Some(title))
    }
}

/// Clones the created repository into the working directory.
pub struct CloneRepo {
    vcs: Arc<dyn SourceControl>,
}

impl CloneRepo {
    pub fn new(vcs: Arc<dyn SourceControl>) -> Self {
        Self { vcs }
    }
}

#[async_trait]
impl Step for CloneRepo {
    fn title(&self) -> String {
        "Cloning remote repository".to_string()
    }

    async fn run(&self, ctx: &mut Context) -> Result<Option<String>, GitInitError> {
        let url = ctx.clone_url()?.to_string();
        let path = self.vcs.clone_repository(&url).await?;
        ctx.local_path = Some(path);
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::Sequencer;
    use crate::status::{SequenceStatus, StepStatus};
    use crate::step::NullReporter;
    use crate::traits::CreatedRepository;
    use crate::PatFile;
    use std::path::PathBuf;
    use std::sync::Mutex;

    struct FakeCredentials {
        result: Result<String, GitInitError>,
    }

    impl FakeCredentials {
        fn token(token: &str) -> Self {
            Self {
                result: Ok(token.to_string()),
            }
        }

        fn missing() -> Self {
            Self {
                result: Err(GitInitError::CredentialNotFound {
                    path: PathBuf::from("/nonexistent/pat"),
                }),
            }
        }
    }

    impl CredentialStore for FakeCredentials {
        fn load(&self) -> Result<String, GitInitError> {
            match &self.result {
                Ok(token) => Ok(token.clone()),
                Err(GitInitError::CredentialNotFound { path }) => {
                    Err(GitInitError::CredentialNotFound { path: path.clone() })
                }
                Err(_) => unreachable!(),
            }
        }
    }

    /// Records `(name, token)` per call.
    struct FakeProvider {
        calls: Mutex<Vec<(String, String)>>,
        result: Result<CreatedRepository, (u16, String)>,
    }

    impl FakeProvider {
        fn succeeding(created: CreatedRepository) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                result: Ok(created),
            }
        }

        fn failing(status: u16, message: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                result: Err((status, message.to_string())),
            }
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RepositoryProvider for FakeProvider {
        async fn create_repository(
            &self,
            name: &str,
            token: &str,
            _options: &RepositoryOptions,
        ) -> Result<CreatedRepository, GitInitError> {
            self.calls
                .lock()
                .unwrap()
                .push((name.to_string(), token.to_string()));
            match &self.result {
                Ok(created) => Ok(created.clone()),
                Err((status, message)) => Err(GitInitError::Provider {
                    status: *status,
                    message: message.clone(),
                }),
            }
        }
    }

    /// Records cloned URLs.
    struct FakeVcs {
        calls: Mutex<Vec<String>>,
        result: Result<PathBuf, String>,
    }

    impl FakeVcs {
        fn cloning_into(path: impl Into<PathBuf>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                result: Ok(path.into()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                result: Err(message.to_string()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SourceControl for FakeVcs {
        async fn clone_repository(&self, url: &str) -> Result<PathBuf, GitInitError> {
            self.calls.lock().unwrap().push(url.to_string());
            match &self.result {
                Ok(path) => Ok(path.clone()),
                Err(message) => Err(GitInitError::Clone {
                    message: message.clone(),
                }),
            }
        }
    }

    fn created(remote: &str, clone: &str, name: &str) -> CreatedRepository {
        CreatedRepository {
            remote_url: remote.to_string(),
            clone_url: clone.to_string(),
            canonical_name: name.to_string(),
        }
    }

    fn sequence(
        store: Arc<dyn CredentialStore>,
        provider: Arc<dyn RepositoryProvider>,
        vcs: Arc<dyn SourceControl>,
    ) -> Sequencer {
        Sequencer::new(vec![
            Box::new(FetchToken::new(store)),
            Box::new(CreateRemoteRepo::new(
                provider,
                RepositoryOptions::default(),
            )),
            Box::new(CloneRepo::new(vcs)),
        ])
    }

    #[tokio::test]
    async fn test_missing_credential_stops_before_provider() {
        let provider = Arc::new(FakeProvider::succeeding(created(
            "https://host/u/foo",
            "git@host:u/foo.git",
            "foo",
        )));
        let vcs = Arc::new(FakeVcs::cloning_into("/tmp/foo"));
        let mut sequencer = sequence(
            Arc::new(FakeCredentials::missing()),
            provider.clone(),
            vcs.clone(),
        );

        let err = sequencer
            .run(Context::new("foo").unwrap(), &NullReporter)
            .await
            .unwrap_err();

        assert!(matches!(err, GitInitError::CredentialNotFound { .. }));
        assert!(provider.calls().is_empty());
        assert!(vcs.calls().is_empty());
        assert_eq!(
            sequencer.step_statuses(),
            &[StepStatus::Failed, StepStatus::Pending, StepStatus::Pending]
        );
    }

    #[tokio::test]
    async fn test_clone_gets_exact_provider_url_once() {
        let provider = Arc::new(FakeProvider::succeeding(created(
            "https://host/owner/foo",
            "git@host:owner/foo.git",
            "foo",
        )));
        let vcs = Arc::new(FakeVcs::cloning_into("/work/foo"));
        let mut sequencer = sequence(
            Arc::new(FakeCredentials::token("abc123")),
            provider.clone(),
            vcs.clone(),
        );

        let ctx = sequencer
            .run(Context::new("foo").unwrap(), &NullReporter)
            .await
            .unwrap();

        assert_eq!(vcs.calls(), vec!["git@host:owner/foo.git".to_string()]);
        assert_eq!(ctx.canonical_name.as_deref(), Some("foo"));
        assert_eq!(ctx.remote_url.as_deref(), Some("https://host/owner/foo"));
    }

    #[tokio::test]
    async fn test_provider_conflict_skips_clone() {
        let provider = Arc::new(FakeProvider::failing(
            422,
            "name already exists on this account",
        ));
        let vcs = Arc::new(FakeVcs::cloning_into("/work/foo"));
        let mut sequencer = sequence(
            Arc::new(FakeCredentials::token("abc123")),
            provider.clone(),
            vcs.clone(),
        );

        let err = sequencer
            .run(Context::new("foo").unwrap(), &NullReporter)
            .await
            .unwrap_err();

        assert!(err.is_name_conflict());
        assert_eq!(
            err.to_string(),
            "repository creation failed: 422::name already exists on this account"
        );
        assert!(vcs.calls().is_empty());
        assert_eq!(sequencer.status(), SequenceStatus::Aborted);
    }

    #[tokio::test]
    async fn test_clone_failure_after_creation_is_final_error() {
        let provider = Arc::new(FakeProvider::succeeding(created(
            "https://host/u/foo",
            "git@host:u/foo.git",
            "foo",
        )));
        let vcs = Arc::new(FakeVcs::failing("destination path 'foo' already exists"));
        let mut sequencer = sequence(
            Arc::new(FakeCredentials::token("abc123")),
            provider.clone(),
            vcs.clone(),
        );

        let err = sequencer
            .run(Context::new("foo").unwrap(), &NullReporter)
            .await
            .unwrap_err();

        // One creation attempt, one clone attempt; the remote is not rolled back.
        assert!(matches!(err, GitInitError::Clone { .. }));
        assert_eq!(provider.calls().len(), 1);
        assert_eq!(vcs.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_end_to_end_with_pat_file() {
        let dir = tempfile::tempdir().unwrap();
        let pat_path = dir.path().join("pat");
        std::fs::write(&pat_path, "abc123\n").unwrap();

        let cwd = dir.path().to_path_buf();
        let provider = Arc::new(FakeProvider::succeeding(created(
            "https://host/u/my-app",
            "git@host:u/my-app.git",
            "my-app",
        )));
        let vcs = Arc::new(FakeVcs::cloning_into(cwd.join("my-app")));
        let mut sequencer = sequence(
            Arc::new(PatFile::new(&pat_path)),
            provider.clone(),
            vcs.clone(),
        );

        let ctx = sequencer
            .run(Context::new("my-app").unwrap(), &NullReporter)
            .await
            .unwrap();

        assert_eq!(provider.calls(), vec![("my-app".to_string(), "abc123".to_string())]);
        assert_eq!(ctx.local_path.as_deref(), Some(cwd.join("my-app").as_path()));
        assert_eq!(sequencer.status(), SequenceStatus::Completed);
        assert!(sequencer
            .step_statuses()
            .iter()
            .all(|s| *s == StepStatus::Succeeded));
    }
}
