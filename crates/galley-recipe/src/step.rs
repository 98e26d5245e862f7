//! Step table entries
//!
//! The recipe owns a dense ordered array of (operation, flag bits).
//! Flags are addressed by index through the recipe's guarded mutators,
//! never through external references to the operation objects.

use galley_operation::Operation;
use std::sync::Arc;

/// Scheduling flags for one step, all `false` by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepFlags {
    /// Skip this step without invoking it or touching the dish
    pub disabled: bool,
    /// Halt execution before this step runs
    pub breakpoint: bool,
    /// Control-flow node rather than a data transform (reserved)
    pub flow_control: bool,
}

/// One entry in the recipe's ordered step table
#[derive(Clone)]
pub(crate) struct Step {
    pub(crate) operation: Arc<dyn Operation>,
    pub(crate) flags: StepFlags,
}

impl Step {
    pub(crate) fn new(operation: Arc<dyn Operation>) -> Self {
        Self {
            operation,
            flags: StepFlags::default(),
        }
    }
}
