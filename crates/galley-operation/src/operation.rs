//! The operation trait

use crate::error::OperationError;
use crate::output::OperationOutput;

/// One unit of transformation in a recipe.
///
/// Implementations are dispatched as `Arc<dyn Operation>` from the
/// recipe's step table. Two operations may share a name; steps are
/// distinguished by position, not by name.
///
/// # Contract
/// - Metadata accessors are pure and fixed for the lifetime of the
///   instance.
/// - `execute` may suspend; the engine awaits each step to completion
///   before starting the next, so steps never run concurrently within
///   one execution.
#[async_trait::async_trait]
pub trait Operation: Send + Sync {
    /// Display name (non-empty)
    fn name(&self) -> &str;

    /// Human-readable description, Markdown supported
    fn description(&self) -> &str;

    /// Optional reference link for the transformation
    fn info_url(&self) -> Option<&str> {
        None
    }

    /// Perform the transformation
    ///
    /// The result is convertible into bytes so the engine can feed it
    /// to the next stage regardless of the operation's natural output
    /// type.
    ///
    /// # Errors
    /// Returns [`OperationError`] naming this operation and the
    /// underlying cause. The built-in codecs are total and never fail;
    /// the failure path exists for steps that validate or parse their
    /// input.
    async fn execute(&self, input: &[u8]) -> Result<OperationOutput, OperationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Reverse;

    #[async_trait::async_trait]
    impl Operation for Reverse {
        fn name(&self) -> &str {
            "Reverse"
        }

        fn description(&self) -> &str {
            "Reverses the input bytes."
        }

        async fn execute(&self, input: &[u8]) -> Result<OperationOutput, OperationError> {
            let mut bytes = input.to_vec();
            bytes.reverse();
            Ok(OperationOutput::Bytes(bytes))
        }
    }

    #[tokio::test]
    async fn trait_object_dispatch() {
        let op: std::sync::Arc<dyn Operation> = std::sync::Arc::new(Reverse);

        assert_eq!(op.name(), "Reverse");
        assert_eq!(op.info_url(), None);

        let output = op.execute(b"abc").await.unwrap();
        assert_eq!(output.into_bytes(), b"cba");
    }
}
