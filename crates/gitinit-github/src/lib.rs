//! GitHub implementation of the gitinit repository provider.
//!
//! Thin wrapper over the GitHub REST API's `POST /user/repos` endpoint,
//! authenticated with the personal access token as a bearer credential.

mod client;
mod wire;

pub use client::{GitHubClient, DEFAULT_BASE_URL};
