use thiserror::Error;

/// Top-level error type for the GlyphGate runtime.
///
/// Every variant except `Config` is recovered at the request boundary and
/// surfaced to the caller as `{"success": false, "error": ...}`.
#[derive(Debug, Error)]
pub enum GlyphError {
    #[error("No image data provided")]
    MissingImage,

    #[error("Failed to decode base64 image: {0}")]
    Decode(String),

    #[error("OCR processing failed: {0}")]
    Recognition(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
