//! HTTP client for the GitHub REST API.

use async_trait::async_trait;
use tracing::debug;

use gitinit_core::{CreatedRepository, GitInitError, RepositoryOptions, RepositoryProvider};

use crate::wire::{ApiErrorBody, CreateRepositoryRequest, CreateRepositoryResponse};

/// Production GitHub endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// GitHub requires a User-Agent on every request.
const USER_AGENT: &str = concat!("gitinit/", env!("CARGO_PKG_VERSION"));

/// Repository provider backed by the GitHub REST API.
pub struct GitHubClient {
    inner: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client against the production API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a different base URL (used in tests).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepositoryProvider for GitHubClient {
    async fn create_repository(
        &self,
        name: &str,
        token: &str,
        options: &RepositoryOptions,
    ) -> Result<CreatedRepository, GitInitError> {
        let url = format!("{}/user/repos", self.base_url);
        debug!(url = %url, repo = %name, "Creating remote repository");

        let request = CreateRepositoryRequest {
            name: name.to_string(),
            gitignore_template: options.gitignore_template.clone(),
            auto_init: options.auto_init,
        };

        let response = self
            .inner
            .post(&url)
            .bearer_auth(token)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .json(&request)
            .send()
            .await
            .map_err(|e| GitInitError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(GitInitError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let body: CreateRepositoryResponse = response
            .json()
            .await
            .map_err(|e| GitInitError::Http(e.to_string()))?;

        debug!(repo = %body.name, url = %body.html_url, "Remote repository created");
        Ok(CreatedRepository {
            remote_url: body.html_url,
            clone_url: body.ssh_url,
            canonical_name: body.name,
        })
    }
}
