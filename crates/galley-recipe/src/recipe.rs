//! The recipe: an ordered pipeline of operations plus the engine that
//! runs them over a dish

use crate::error::RecipeError;
use crate::observer::{RecipeObserver, SkipReason};
use crate::step::{Step, StepFlags};
use galley_dish::Dish;
use galley_operation::Operation;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error};

/// An ordered, mutably-extensible list of operations and the engine
/// that executes them step-wise over a [`Dish`].
///
/// The step table and every step's flags are mutated only through the
/// recipe's guarded mutators. Executions snapshot the table at start
/// and do not observe appends made while they run (snapshot
/// consistency).
///
/// # Usage constraint
/// At most one `execute` call should be in flight per dish at a time;
/// concurrent independent executions must use independent dishes. This
/// is a documented convention, not a type-system guarantee.
pub struct Recipe {
    steps: Mutex<Vec<Step>>,
    last_executed: Mutex<Option<Arc<dyn Operation>>>,
    observers: Vec<Arc<dyn RecipeObserver>>,
}

impl Recipe {
    /// Create a recipe from an ordered list of operations
    #[must_use]
    pub fn new(operations: Vec<Arc<dyn Operation>>) -> Self {
        Self::with_observers(operations, Vec::new())
    }

    /// Create a recipe with observers attached
    ///
    /// Observers are fixed for the lifetime of the recipe and notified
    /// at defined points of every execution.
    #[must_use]
    pub fn with_observers(
        operations: Vec<Arc<dyn Operation>>,
        observers: Vec<Arc<dyn RecipeObserver>>,
    ) -> Self {
        Self {
            steps: Mutex::new(operations.into_iter().map(Step::new).collect()),
            last_executed: Mutex::new(None),
            observers,
        }
    }

    // --- Mutation ---

    /// Append an operation to the end of the sequence
    pub fn add_operation(&self, operation: Arc<dyn Operation>) {
        self.steps.lock().push(Step::new(operation));
    }

    /// Append a batch of operations, preserving their relative order
    ///
    /// An empty batch is a no-op.
    pub fn add_operations(&self, operations: Vec<Arc<dyn Operation>>) {
        self.steps
            .lock()
            .extend(operations.into_iter().map(Step::new));
    }

    /// Set the breakpoint flag on the step at `index`
    ///
    /// Out-of-range indices are a silent no-op, so UI-driven toggles
    /// never need a bounds check first.
    pub fn set_breakpoint(&self, index: usize, enabled: bool) {
        if let Some(step) = self.steps.lock().get_mut(index) {
            step.flags.breakpoint = enabled;
        }
    }

    /// Set the disabled flag on the step at `index`
    ///
    /// Same tolerant out-of-range contract as [`Recipe::set_breakpoint`].
    pub fn set_disabled(&self, index: usize, disabled: bool) {
        if let Some(step) = self.steps.lock().get_mut(index) {
            step.flags.disabled = disabled;
        }
    }

    /// Mark the step at `index` as a flow-control node
    ///
    /// Same tolerant out-of-range contract as [`Recipe::set_breakpoint`].
    pub fn set_flow_control(&self, index: usize, enabled: bool) {
        if let Some(step) = self.steps.lock().get_mut(index) {
            step.flags.flow_control = enabled;
        }
    }

    /// Clear breakpoints on every step at position `0..up_to`
    ///
    /// Positions at or beyond `up_to` are untouched; `up_to` beyond the
    /// sequence length clears all.
    pub fn remove_breakpoints(&self, up_to: usize) {
        let mut steps = self.steps.lock();
        for step in steps.iter_mut().take(up_to) {
            step.flags.breakpoint = false;
        }
    }

    // --- Inspection ---

    /// Number of operations in the sequence
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.lock().len()
    }

    /// Whether the sequence is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.lock().is_empty()
    }

    /// The operation at `index`, if any
    #[must_use]
    pub fn operation(&self, index: usize) -> Option<Arc<dyn Operation>> {
        self.steps
            .lock()
            .get(index)
            .map(|step| Arc::clone(&step.operation))
    }

    /// Scheduling flags of the step at `index`, if any
    #[must_use]
    pub fn flags(&self, index: usize) -> Option<StepFlags> {
        self.steps.lock().get(index).map(|step| step.flags)
    }

    /// The most recently successfully executed operation
    ///
    /// Cleared when an execution starts from the top of the sequence.
    #[must_use]
    pub fn last_executed(&self) -> Option<Arc<dyn Operation>> {
        self.last_executed.lock().clone()
    }

    // --- Execution ---

    /// Execute the recipe over `dish`, starting at the absolute step
    /// index `start_from`.
    ///
    /// Steps run strictly in sequence: each reads the dish, transforms
    /// the value, and writes the result back before the next step is
    /// considered. Disabled steps are skipped; flow-control steps apply
    /// no transform; a breakpointed step halts the run before
    /// executing.
    ///
    /// The step table is snapshotted once at the start, so appends made
    /// while a run is in flight are not observed by it.
    ///
    /// # Returns
    /// The absolute index reached: the sequence length on completion,
    /// or the index of a breakpointed step that has not run. Resume a
    /// paused run by calling `execute` again with `start_from` set to
    /// the returned index (after clearing or skipping the breakpoint).
    ///
    /// # Errors
    /// - [`RecipeError::InvalidStartIndex`] if `start_from` is past the
    ///   end of the sequence, before any side effect
    /// - [`RecipeError::InvalidInput`] if the dish holds no value when
    ///   a step comes up
    /// - [`RecipeError::OperationExecution`] if a step fails; the run
    ///   aborts at that step and no later operation is invoked
    pub async fn execute(&self, dish: &Dish, start_from: usize) -> Result<usize, RecipeError> {
        let snapshot: Vec<Step> = self.steps.lock().clone();
        let total = snapshot.len();

        if start_from > total {
            return Err(RecipeError::InvalidStartIndex {
                start_from,
                len: total,
            });
        }

        // A fresh run from the top invalidates prior run state.
        if start_from == 0 {
            *self.last_executed.lock() = None;
        }

        debug!(total, start_from, "executing recipe");

        for (index, step) in snapshot.iter().enumerate().skip(start_from) {
            let name = step.operation.name();

            let Some(input) = dish.get() else {
                return Err(RecipeError::InvalidInput { index });
            };

            if step.flags.disabled {
                debug!(index, name, "step disabled, skipping");
                self.notify(|observer| observer.on_step_skipped(index, name, SkipReason::Disabled));
                continue;
            }

            if step.flags.breakpoint {
                debug!(index, name, "pausing at breakpoint");
                self.notify(|observer| observer.on_breakpoint(index, name));
                return Ok(index);
            }

            if step.flags.flow_control {
                // Reserved seam for branch/fork/merge nodes; no data
                // transform is applied here in the current scope.
                debug!(index, name, "flow-control step, no transform");
                self.notify(|observer| {
                    observer.on_step_skipped(index, name, SkipReason::FlowControl);
                });
                continue;
            }

            debug!(index, name, "executing step");
            self.notify(|observer| observer.on_step_started(index, name));

            let output = match step.operation.execute(&input).await {
                Ok(output) => output,
                Err(source) => {
                    error!(index, name, %source, "step failed, aborting run");
                    self.notify(|observer| observer.on_run_failed(index, name));
                    return Err(RecipeError::OperationExecution {
                        index,
                        name: name.to_string(),
                        source,
                    });
                }
            };

            dish.set(output.into_bytes());
            *self.last_executed.lock() = Some(Arc::clone(&step.operation));
            self.notify(|observer| observer.on_step_completed(index, name));
        }

        debug!(total, "recipe complete");
        self.notify(|observer| observer.on_run_completed(total));
        Ok(total)
    }

    fn notify(&self, event: impl Fn(&dyn RecipeObserver)) {
        for observer in &self.observers {
            event(observer.as_ref());
        }
    }
}

impl fmt::Debug for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recipe")
            .field("len", &self.len())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
