//! Presentation-only rendering hook
//!
//! Separate capability from execution: rendering has no effect on
//! pipeline semantics and is never invoked by the engine.

/// Display-oriented representation of raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderable {
    /// Render as text
    Text(String),
}

/// Optional capability: prepare raw bytes for presentation.
///
/// Implemented by operations whose output has a natural display form
/// (e.g. the encoders render as text). UIs call this on the dish value;
/// the execution path never does.
pub trait Presentable {
    /// Transform raw bytes into a display-oriented representation
    fn prepare_for_presentation(&self, input: &[u8]) -> Renderable;
}
