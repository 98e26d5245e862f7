//! To Base64 operation

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use galley_operation::{Operation, OperationError, OperationOutput, Presentable, Renderable};

/// Encodes raw bytes into an ASCII Base64 string.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToBase64;

impl ToBase64 {
    /// Create the operation
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Operation for ToBase64 {
    fn name(&self) -> &str {
        "To Base64"
    }

    fn description(&self) -> &str {
        "Base64 is a notation for encoding arbitrary byte data using a restricted \
         set of symbols that can be conveniently used by humans and processed by \
         computers.\n\nThis operation encodes raw data into an ASCII Base64 \
         string.\n\ne.g. `hello` becomes `aGVsbG8=`"
    }

    fn info_url(&self) -> Option<&str> {
        Some("https://wikipedia.org/wiki/Base64")
    }

    async fn execute(&self, input: &[u8]) -> Result<OperationOutput, OperationError> {
        Ok(OperationOutput::Text(STANDARD.encode(input)))
    }
}

impl Presentable for ToBase64 {
    fn prepare_for_presentation(&self, input: &[u8]) -> Renderable {
        Renderable::Text(String::from_utf8_lossy(input).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn encode(input: &[u8]) -> String {
        match ToBase64::new().execute(input).await.unwrap() {
            OperationOutput::Text(text) => text,
            other => panic!("expected text output, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_input_encodes_to_empty_string() {
        assert_eq!(encode(b"").await, "");
    }

    #[tokio::test]
    async fn rfc_4648_vectors() {
        assert_eq!(encode(b"f").await, "Zg==");
        assert_eq!(encode(b"fo").await, "Zm8=");
        assert_eq!(encode(b"foo").await, "Zm9v");
        assert_eq!(encode(b"foob").await, "Zm9vYg==");
        assert_eq!(encode(b"fooba").await, "Zm9vYmE=");
        assert_eq!(encode(b"foobar").await, "Zm9vYmFy");
    }

    #[tokio::test]
    async fn hello_world_round_trip() {
        assert_eq!(encode(b"Hello, world!").await, "SGVsbG8sIHdvcmxkIQ==");
    }

    #[tokio::test]
    async fn binary_input_is_accepted() {
        assert_eq!(encode(&[0x00, 0xff, 0x10]).await, "AP8Q");
    }

    #[test]
    fn renders_input_as_text() {
        let rendered = ToBase64::new().prepare_for_presentation(b"aGVsbG8=");
        assert_eq!(rendered, Renderable::Text("aGVsbG8=".to_string()));
    }
}
