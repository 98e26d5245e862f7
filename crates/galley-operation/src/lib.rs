//! Galley Operation Contract (galley-operation)
//!
//! Defines the uniform contract every recipe step implements:
//!
//! - [`Operation`]: identity, metadata, and the asynchronous execute
//!   contract from byte input to a byte-convertible result
//! - [`OperationOutput`]: the canonical output shapes an operation may
//!   produce, all convertible into bytes for the next stage
//! - [`Presentable`] / [`Renderable`]: optional presentation-only hook,
//!   separate from the execution path
//! - [`OperationError`]: a step failure carrying the operation's name
//!   and the underlying cause
//!
//! Concrete steps live outside this crate (see `galley-codec`); the
//! engine (`galley-recipe`) depends only on this contract.

mod error;
mod operation;
mod output;
mod render;

pub use error::OperationError;
pub use operation::Operation;
pub use output::OperationOutput;
pub use render::{Presentable, Renderable};
