//! Tesseract CLI engine.
//!
//! Feeds image bytes to `tesseract stdin stdout` through a pipe, one process
//! per recognition. The wrapper itself holds no mutable state.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, instrument};

use glyphgate_core::GlyphError;

use crate::recognizer::TextRecognizer;
use crate::validate_image;

/// [`TextRecognizer`] backed by the `tesseract` command-line binary.
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    binary: String,
    languages: Vec<String>,
}

impl TesseractRecognizer {
    pub fn new(binary: impl Into<String>, languages: Vec<String>) -> Self {
        Self {
            binary: binary.into(),
            languages,
        }
    }

    fn language_arg(&self) -> String {
        if self.languages.is_empty() {
            "eng".to_string()
        } else {
            self.languages.join("+")
        }
    }
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new("tesseract", vec!["eng".to_string()])
    }
}

#[async_trait]
impl TextRecognizer for TesseractRecognizer {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    #[instrument(skip(self, image), fields(bytes = image.len()))]
    async fn recognize(&self, image: &[u8]) -> Result<String, GlyphError> {
        // Fail early with the image decoder's message if the payload is not
        // actually an image.
        validate_image(image)?;

        let mut child = Command::new(&self.binary)
            .arg("stdin")
            .arg("stdout")
            .arg("-l")
            .arg(self.language_arg())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                GlyphError::Recognition(format!("failed to launch {}: {e}", self.binary))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(image)
                .await
                .map_err(|e| GlyphError::Recognition(e.to_string()))?;
            // Close the pipe so tesseract sees EOF.
            drop(stdin);
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| GlyphError::Recognition(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GlyphError::Recognition(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
        debug!(chars = text.len(), "recognition complete");
        Ok(text)
    }
}
