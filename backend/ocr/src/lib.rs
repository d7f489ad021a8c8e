//! OCR capability for GlyphGate.
//!
//! The gateway talks to OCR through the [`TextRecognizer`] trait; the default
//! engine wraps the `tesseract` CLI. Engines are stateless and shared across
//! requests behind an `Arc`.

pub mod recognizer;
pub mod tesseract;

pub use recognizer::{FixedRecognizer, TextRecognizer};
pub use tesseract::TesseractRecognizer;

use glyphgate_core::GlyphError;

/// Validate that raw bytes parse as a supported image format.
///
/// Runs before recognition so a corrupt payload fails with the image
/// decoder's message rather than an opaque engine error.
pub fn validate_image(bytes: &[u8]) -> Result<image::DynamicImage, GlyphError> {
    image::load_from_memory(bytes).map_err(|e| GlyphError::Recognition(e.to_string()))
}
