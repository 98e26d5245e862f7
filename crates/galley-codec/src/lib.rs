//! Galley Built-in Codecs (galley-codec)
//!
//! Stateless codec steps implementing the [`galley_operation::Operation`]
//! contract:
//!
//! - [`ToBase64`]: raw bytes to an ASCII Base64 string
//! - [`ToHex`]: raw bytes to lowercase, space-delimited hexadecimal
//!
//! Both are pure, total functions over their input. New steps are added
//! by implementing the operation contract, not by extending the engine.

mod to_base64;
mod to_hex;

pub use to_base64::ToBase64;
pub use to_hex::ToHex;
