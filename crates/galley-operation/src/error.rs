//! Operation failure type

use std::error::Error;

/// A step's execute failed.
///
/// Carries the operation's name and the underlying cause so the engine
/// can surface the failing step without re-running the pipeline.
#[derive(Debug, thiserror::Error)]
#[error("operation `{name}` failed: {source}")]
pub struct OperationError {
    name: String,
    #[source]
    source: Box<dyn Error + Send + Sync>,
}

impl OperationError {
    /// Create an error for the named operation with the given cause
    pub fn new(
        name: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Name of the operation that failed
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_name_and_cause() {
        let error = OperationError::new("From Hex", anyhow::anyhow!("odd digit count"));

        assert_eq!(error.name(), "From Hex");
        assert_eq!(
            error.to_string(),
            "operation `From Hex` failed: odd digit count"
        );
        assert!(error.source().is_some());
    }
}
