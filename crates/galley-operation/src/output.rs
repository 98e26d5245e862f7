//! Byte-convertible operation outputs

/// Result of an operation's execute, convertible into bytes.
///
/// Operations produce whatever shape is natural for them (text for the
/// encoders, raw bytes for binary transforms); the engine converts the
/// result with [`OperationOutput::into_bytes`] before writing it back
/// into the dish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutput {
    /// Raw byte output
    Bytes(Vec<u8>),
    /// Text output, encoded as UTF-8 when fed to the next stage
    Text(String),
}

impl OperationOutput {
    /// Canonical byte encoding of this output
    #[inline]
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Bytes(bytes) => bytes,
            Self::Text(text) => text.into_bytes(),
        }
    }

    /// Length in bytes of the canonical encoding
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Bytes(bytes) => bytes.len(),
            Self::Text(text) => text.len(),
        }
    }

    /// Whether the canonical encoding is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<u8>> for OperationOutput {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<String> for OperationOutput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
