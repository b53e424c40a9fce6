//! Ordered, fail-fast step execution over one shared context.

use tracing::{debug, warn};

use crate::context::Context;
use crate::error::GitInitError;
use crate::status::{SequenceStatus, StepStatus};
use crate::step::{ProgressReporter, Step};

/// Runs a fixed sequence of steps against one [`Context`].
///
/// Steps execute strictly in declaration order. The first failure marks the
/// sequence aborted and the remaining steps stay pending; nothing is retried
/// or rolled back.
pub struct Sequencer {
    steps: Vec<Box<dyn Step>>,
    step_statuses: Vec<StepStatus>,
    status: SequenceStatus,
}

impl Sequencer {
    /// Create a sequencer over the given steps.
    pub fn new(steps: Vec<Box<dyn Step>>) -> Self {
        let step_statuses = vec![StepStatus::Pending; steps.len()];
        Self {
            steps,
            step_statuses,
            status: SequenceStatus::Idle,
        }
    }

    /// Current sequence-level status.
    pub fn status(&self) -> SequenceStatus {
        self.status
    }

    /// Per-step statuses, in declaration order.
    pub fn step_statuses(&self) -> &[StepStatus] {
        &self.step_statuses
    }

    /// Run every step in order, reporting transitions to `reporter`.
    ///
    /// Returns the final context when all steps succeed, or the first
    /// error otherwise.
    pub async fn run(
        &mut self,
        mut ctx: Context,
        reporter: &dyn ProgressReporter,
    ) -> Result<Context, GitInitError> {
        let total = self.steps.len();
        self.status = SequenceStatus::Running;

        for (index, step) in self.steps.iter().enumerate() {
            let title = step.title();
            self.step_statuses[index] = StepStatus::Running;
            reporter.step_running(index, total, &title);
            debug!(step = %title, index, total, "Step started");

            match step.run(&mut ctx).await {
                Ok(new_title) => {
                    self.step_statuses[index] = StepStatus::Succeeded;
                    let title = new_title.unwrap_or(title);
                    reporter.step_succeeded(index, &title);
                    debug!(step = %title, index, "Step succeeded");
                }
                Err(err) => {
                    self.step_statuses[index] = StepStatus::Failed;
                    self.status = SequenceStatus::Aborted;
                    reporter.step_failed(index, &title, &err);
                    warn!(step = %title, index, error = %err, "Step failed, aborting sequence");
                    return Err(err);
                }
            }
        }

        self.status = SequenceStatus::Completed;
        Ok(ctx)
    }
}
