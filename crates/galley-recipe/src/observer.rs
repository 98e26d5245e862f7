//! Execution side channel
//!
//! Observers are notified at defined points of a run: step start, skip,
//! pause, step completion, run completion, and failure. They are a
//! side channel only; the engine's behaviour is identical with zero
//! observers attached.

/// Why a step was passed over without executing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The step's disabled flag was set
    Disabled,
    /// The step is a flow-control node; no data transform is applied
    /// at this position in the current scope
    FlowControl,
}

/// Callbacks for step lifecycle events during `Recipe::execute`.
///
/// All methods default to no-ops so implementations override only the
/// events they care about. Callbacks run synchronously on the executing
/// task; keep them cheap.
pub trait RecipeObserver: Send + Sync {
    /// An eligible step is about to execute
    fn on_step_started(&self, index: usize, name: &str) {
        let _ = (index, name);
    }

    /// A step wrote its result back into the dish
    fn on_step_completed(&self, index: usize, name: &str) {
        let _ = (index, name);
    }

    /// A step was passed over without executing
    fn on_step_skipped(&self, index: usize, name: &str, reason: SkipReason) {
        let _ = (index, name, reason);
    }

    /// Execution halted at a breakpointed step, which has not run
    fn on_breakpoint(&self, index: usize, name: &str) {
        let _ = (index, name);
    }

    /// The run reached the end of the sequence
    fn on_run_completed(&self, total: usize) {
        let _ = total;
    }

    /// The run aborted at a failing step
    fn on_run_failed(&self, index: usize, name: &str) {
        let _ = (index, name);
    }
}
