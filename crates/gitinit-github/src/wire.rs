//! Request/response shapes for the repository-creation endpoint.

use serde::{Deserialize, Serialize};

/// Body of `POST /user/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRepositoryRequest {
    pub name: String,
    pub gitignore_template: String,
    pub auto_init: bool,
}

/// Fields read from a successful creation response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateRepositoryResponse {
    pub html_url: String,
    pub ssh_url: String,
    pub name: String,
}

/// Error body the API returns on failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
