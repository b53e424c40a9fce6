//! gitinit Core Domain Types
//!
//! This crate contains the workflow domain of gitinit with no dependencies on:
//! - Network/HTTP
//! - Subprocess execution
//! - Terminal rendering
//!
//! The concrete GitHub client, the git subprocess wrapper and the console
//! reporter live in sibling crates and plug in through the capability traits
//! defined here.

pub mod context;
pub mod credentials;
pub mod error;
pub mod sequencer;
pub mod status;
pub mod step;
pub mod steps;
pub mod traits;

// Re-export commonly used types
pub use context::Context;
pub use credentials::PatFile;
pub use error::GitInitError;
pub use sequencer::Sequencer;
pub use status::{SequenceStatus, StepStatus};
pub use step::{NullReporter, ProgressReporter, Step};
pub use steps::{CloneRepo, CreateRemoteRepo, FetchToken};
pub use traits::{
    CreatedRepository, CredentialStore, RepositoryOptions, RepositoryProvider, SourceControl,
};
