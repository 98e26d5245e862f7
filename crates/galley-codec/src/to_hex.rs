//! To Hex operation

use galley_operation::{Operation, OperationError, OperationOutput, Presentable, Renderable};

// Fixed until operations grow configurable ingredients.
const DELIMITER: &str = " ";

/// Encodes raw bytes as lowercase hexadecimal, one delimited pair per byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToHex;

impl ToHex {
    /// Create the operation
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Operation for ToHex {
    fn name(&self) -> &str {
        "To Hex"
    }

    fn description(&self) -> &str {
        "Converts the input string to hexadecimal bytes separated by the specified \
         delimiter.\n\ne.g. The UTF-8 encoded string `Γειά σου` becomes \
         `ce 93 ce b5 ce b9 ce ac 20 cf 83 ce bf cf 85 0a`"
    }

    fn info_url(&self) -> Option<&str> {
        Some("https://wikipedia.org/wiki/Hexadecimal")
    }

    async fn execute(&self, input: &[u8]) -> Result<OperationOutput, OperationError> {
        let pairs: Vec<String> = input.iter().map(|byte| hex::encode([*byte])).collect();
        Ok(OperationOutput::Text(pairs.join(DELIMITER)))
    }
}

impl Presentable for ToHex {
    fn prepare_for_presentation(&self, input: &[u8]) -> Renderable {
        Renderable::Text(String::from_utf8_lossy(input).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn encode(input: &[u8]) -> String {
        match ToHex::new().execute(input).await.unwrap() {
            OperationOutput::Text(text) => text,
            other => panic!("expected text output, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_input_encodes_to_empty_string() {
        assert_eq!(encode(b"").await, "");
    }

    #[tokio::test]
    async fn single_byte_has_no_delimiter() {
        assert_eq!(encode(b"A").await, "41");
    }

    #[tokio::test]
    async fn hello_world_reference_vector() {
        assert_eq!(
            encode(b"Hello World!").await,
            "48 65 6c 6c 6f 20 57 6f 72 6c 64 21"
        );
    }

    #[tokio::test]
    async fn multibyte_utf8_input() {
        assert_eq!(
            encode("Γειά σου\n".as_bytes()).await,
            "ce 93 ce b5 ce b9 ce ac 20 cf 83 ce bf cf 85 0a"
        );
    }

    #[tokio::test]
    async fn output_is_lowercase() {
        assert_eq!(encode(&[0xde, 0xad, 0xbe, 0xef]).await, "de ad be ef");
    }

    #[test]
    fn renders_input_as_text() {
        let rendered = ToHex::new().prepare_for_presentation(b"Hello");
        assert_eq!(rendered, Renderable::Text("Hello".to_string()));
    }
}
