//! Testing utilities for the galley workspace
//!
//! Shared test operations, a recording observer, and log init.

#![allow(missing_docs)]

use galley_operation::{Operation, OperationError, OperationOutput};
use galley_recipe::{RecipeObserver, SkipReason};
use parking_lot::Mutex;
use std::sync::Arc;

/// Appends a fixed tag to its input, making execution order visible in
/// the dish value.
#[derive(Debug, Clone)]
pub struct TagOperation {
    name: String,
    tag: Vec<u8>,
}

impl TagOperation {
    pub fn new(tag: &str) -> Self {
        Self::named(format!("Tag {tag}"), tag)
    }

    pub fn named(name: impl Into<String>, tag: &str) -> Self {
        Self {
            name: name.into(),
            tag: tag.as_bytes().to_vec(),
        }
    }
}

#[async_trait::async_trait]
impl Operation for TagOperation {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Appends a fixed tag to the input."
    }

    async fn execute(&self, input: &[u8]) -> Result<OperationOutput, OperationError> {
        let mut bytes = input.to_vec();
        bytes.extend_from_slice(&self.tag);
        Ok(OperationOutput::Bytes(bytes))
    }
}

/// Always fails with an [`OperationError`] naming itself.
#[derive(Debug, Clone)]
pub struct FailingOperation {
    name: String,
    message: String,
}

impl FailingOperation {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[async_trait::async_trait]
impl Operation for FailingOperation {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Fails unconditionally."
    }

    async fn execute(&self, _input: &[u8]) -> Result<OperationOutput, OperationError> {
        Err(OperationError::new(
            self.name.clone(),
            anyhow::anyhow!("{}", self.message),
        ))
    }
}

/// Step lifecycle events captured by [`RecordingObserver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservedEvent {
    Started { index: usize, name: String },
    Completed { index: usize, name: String },
    Skipped { index: usize, name: String, reason: SkipReason },
    Breakpoint { index: usize, name: String },
    RunCompleted { total: usize },
    RunFailed { index: usize, name: String },
}

/// Records every observer callback for later assertions.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ObservedEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events.lock().clone()
    }
}

impl RecipeObserver for RecordingObserver {
    fn on_step_started(&self, index: usize, name: &str) {
        self.events.lock().push(ObservedEvent::Started {
            index,
            name: name.to_string(),
        });
    }

    fn on_step_completed(&self, index: usize, name: &str) {
        self.events.lock().push(ObservedEvent::Completed {
            index,
            name: name.to_string(),
        });
    }

    fn on_step_skipped(&self, index: usize, name: &str, reason: SkipReason) {
        self.events.lock().push(ObservedEvent::Skipped {
            index,
            name: name.to_string(),
            reason,
        });
    }

    fn on_breakpoint(&self, index: usize, name: &str) {
        self.events.lock().push(ObservedEvent::Breakpoint {
            index,
            name: name.to_string(),
        });
    }

    fn on_run_completed(&self, total: usize) {
        self.events.lock().push(ObservedEvent::RunCompleted { total });
    }

    fn on_run_failed(&self, index: usize, name: &str) {
        self.events.lock().push(ObservedEvent::RunFailed {
            index,
            name: name.to_string(),
        });
    }
}

/// Initialise tracing for a test binary. Safe to call repeatedly.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
