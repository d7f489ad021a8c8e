//! Decoding of base64 image payloads, with data-URI prefix stripping.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::GlyphError;

/// Decode a base64 image payload into raw bytes.
///
/// The value may carry a data-URI prefix (`data:image/png;base64,<payload>`);
/// when a comma is present, everything after the FIRST comma is the payload
/// and everything before it is discarded. Commas inside the payload itself are
/// kept intact.
pub fn decode_image_payload(raw: &str) -> Result<Vec<u8>, GlyphError> {
    if raw.is_empty() {
        return Err(GlyphError::MissingImage);
    }

    let payload = match raw.split_once(',') {
        Some((_prefix, rest)) => rest,
        None => raw,
    };

    STANDARD
        .decode(payload)
        .map_err(|e| GlyphError::Decode(e.to_string()))
}
