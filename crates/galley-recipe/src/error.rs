//! Error types for recipe execution
//!
//! Callers receive either a resumption index (success or breakpoint) or
//! one of these errors; there is no partial outcome. A paused run is not
//! an error and is reported through `execute`'s `Ok` value instead.

use galley_operation::OperationError;

/// Failure taxonomy for a single `execute` call
#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    /// `start_from` does not address an existing operation and is not
    /// the position just past the end of an already-complete run.
    /// Raised before any side effect.
    #[error("start index {start_from} is out of range for {len} operations")]
    InvalidStartIndex {
        /// Requested starting position
        start_from: usize,
        /// Number of operations in the sequence at snapshot time
        len: usize,
    },

    /// The dish held no value when the step at `index` was about to be
    /// considered. Operations never run without an input; the caller
    /// must pre-seed the dish.
    #[error("no dish value present at step {index}")]
    InvalidInput {
        /// Absolute position of the step that found the dish empty
        index: usize,
    },

    /// A step's execute failed. The run aborted at this step; no later
    /// operation was invoked.
    #[error("step {index} (`{name}`) failed")]
    OperationExecution {
        /// Absolute position of the failing step
        index: usize,
        /// Name of the failing operation
        name: String,
        /// The operation's own failure report
        #[source]
        source: OperationError,
    },
}

impl RecipeError {
    /// Absolute step index this error is anchored to, if any
    #[inline]
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::InvalidStartIndex { .. } => None,
            Self::InvalidInput { index } | Self::OperationExecution { index, .. } => Some(*index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn execution_error_keeps_step_context() {
        let source = OperationError::new("From Hex", "odd digit count".to_string());
        let error = RecipeError::OperationExecution {
            index: 3,
            name: "From Hex".to_string(),
            source,
        };

        assert_eq!(error.index(), Some(3));
        assert_eq!(error.to_string(), "step 3 (`From Hex`) failed");
        assert!(error.source().is_some());
    }

    #[test]
    fn start_index_error_has_no_step_anchor() {
        let error = RecipeError::InvalidStartIndex {
            start_from: 9,
            len: 2,
        };
        assert_eq!(error.index(), None);
    }
}
