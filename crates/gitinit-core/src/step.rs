//! The step abstraction and the progress display sink.

use async_trait::async_trait;

use crate::context::Context;
use crate::error::GitInitError;

/// A named unit of work in a sequence.
///
/// Steps are constructed once, never mutated, and discarded after the run.
/// All state a step produces goes into the shared [`Context`].
#[async_trait]
pub trait Step: Send + Sync {
    /// Display title shown while the step runs.
    fn title(&self) -> String;

    /// Execute against the shared context.
    ///
    /// `Ok(Some(title))` replaces the display title after success, e.g. to
    /// embed a URL the step computed. `Ok(None)` keeps the original title.
    async fn run(&self, ctx: &mut Context) -> Result<Option<String>, GitInitError>;
}

/// Display sink the sequencer reports step transitions to.
///
/// Rendering is a side channel: implementations must not influence control
/// flow, and the sequencer never inspects what they do.
pub trait ProgressReporter: Send + Sync {
    /// Step `index` (zero-based, of `total`) moved from pending to running.
    fn step_running(&self, index: usize, total: usize, title: &str);

    /// Step `index` succeeded; `title` is already rewritten if the step
    /// requested it.
    fn step_succeeded(&self, index: usize, title: &str);

    /// Step `index` failed with `error`; no further step will run.
    fn step_failed(&self, index: usize, title: &str, error: &GitInitError);
}

/// Reporter that discards all transitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn step_running(&self, _index: usize, _total: usize, _title: &str) {}
    fn step_succeeded(&self, _index: usize, _title: &str) {}
    fn step_failed(&self, _index: usize, _title: &str, _error: &GitInitError) {}
}
