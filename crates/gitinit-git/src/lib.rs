//! git subprocess wrapper for gitinit.
//!
//! Clones a repository by invoking the external `git` executable in a fixed
//! working directory, the same way the user would from a shell. Success is a
//! zero exit code; stderr is surfaced on failure.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use gitinit_core::{GitInitError, SourceControl};

/// Source control backed by the `git` command-line tool.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    workdir: PathBuf,
}

impl GitCli {
    /// Clone into `workdir`, invoking `git` from the PATH.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            program: "git".to_string(),
            workdir: workdir.into(),
        }
    }

    /// Override the executable (full path or PATH lookup name).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Directory clones are created under.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

#[async_trait]
impl SourceControl for GitCli {
    async fn clone_repository(&self, url: &str) -> Result<PathBuf, GitInitError> {
        debug!(url = %url, workdir = %self.workdir.display(), "Running git clone");

        let output = Command::new(&self.program)
            .arg("clone")
            .arg(url)
            .current_dir(&self.workdir)
            .output()
            .await
            .map_err(|e| GitInitError::Clone {
                message: format!("failed to run {}: {}", self.program, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("{} exited with {}", self.program, output.status)
            } else {
                stderr
            };
            warn!(url = %url, "git clone failed");
            return Err(GitInitError::Clone { message });
        }

        Ok(self.workdir.join(repo_dir_name(url)))
    }
}

/// Directory name `git clone` derives from a URL.
///
/// Last path segment (after `/` or the scp-style `:`) with a trailing
/// `.git` stripped.
fn repo_dir_name(url: &str) -> &str {
    let trimmed = url.trim_end_matches('/');
    let last = trimmed
        .rsplit(['/', ':'])
        .next()
        .unwrap_or(trimmed);
    last.strip_suffix(".git").unwrap_or(last)
}
