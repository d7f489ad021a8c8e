//! The OCR capability seam.

use async_trait::async_trait;
use glyphgate_core::GlyphError;

/// A text-recognition engine: image bytes in, recognized text out.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Engine identifier for logs and health reporting.
    fn name(&self) -> &'static str;

    /// Recognize text in an encoded image (PNG, JPEG, ...).
    async fn recognize(&self, image: &[u8]) -> Result<String, GlyphError>;
}

/// Recognizer that returns a fixed string for any input. Test double.
#[derive(Debug, Clone)]
pub struct FixedRecognizer {
    text: String,
}

impl FixedRecognizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl TextRecognizer for FixedRecognizer {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn recognize(&self, _image: &[u8]) -> Result<String, GlyphError> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_recognizer_passes_text_through() {
        let rec = FixedRecognizer::new("ABCD");
        assert_eq!(rec.recognize(b"anything").await.unwrap(), "ABCD");
    }

    #[tokio::test]
    async fn fixed_recognizer_is_deterministic() {
        let rec = FixedRecognizer::new("ABCD");
        let first = rec.recognize(b"img").await.unwrap();
        let second = rec.recognize(b"img").await.unwrap();
        assert_eq!(first, second);
    }
}
