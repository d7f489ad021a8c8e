//! GlyphGate core: shared error type, wire types, and image payload decoding.

pub mod error;
pub mod payload;
pub mod types;

pub use error::GlyphError;
pub use payload::decode_image_payload;
pub use types::{OcrRequest, OcrResponse};
