//! Status enums for steps and the sequence as a whole.

use serde::{Deserialize, Serialize};

/// Status of a single step within a sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepStatus {
    /// Step declared but not yet reached.
    #[default]
    Pending,
    /// Step currently executing.
    Running,
    /// Step finished successfully.
    Succeeded,
    /// Step failed; the sequence stops here.
    Failed,
}

impl StepStatus {
    /// Returns true if the step is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// Status of a sequence run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SequenceStatus {
    /// Sequence constructed but not yet started.
    #[default]
    Idle,
    /// Sequence is executing steps.
    Running,
    /// Every step succeeded.
    Completed,
    /// A step failed and the remaining steps were skipped.
    Aborted,
}

impl SequenceStatus {
    /// Returns true if the sequence finished, whether or not it succeeded.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Aborted)
    }
}
