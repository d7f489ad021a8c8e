//! Typed configuration schema with defaults and env overlay.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Root configuration for GlyphGate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    pub gateway: GatewaySection,
    pub ocr: OcrSection,
    pub logging: LoggingSection,
}

/// HTTP server binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewaySection {
    pub bind_address: String,
    pub port: u16,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// OCR engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrSection {
    /// Path or name of the tesseract binary.
    pub tesseract_path: String,
    /// ISO 639-2 language codes passed to the engine.
    pub languages: Vec<String>,
}

impl Default for OcrSection {
    fn default() -> Self {
        Self {
            tesseract_path: "tesseract".to_string(),
            languages: vec!["eng".to_string()],
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    /// When set, NDJSON logs are also written to daily-rolling files here.
    pub dir: Option<PathBuf>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}

impl GlyphConfig {
    /// Overlay `GLYPHGATE_*` environment variables onto this config.
    pub fn apply_env_overrides(&mut self) {
        self.apply_env_from(&std::env::vars().collect());
    }

    /// Overlay overrides from a provided map (useful for testing).
    pub fn apply_env_from(&mut self, env: &HashMap<String, String>) {
        if let Some(bind) = env.get("GLYPHGATE_BIND") {
            self.gateway.bind_address = bind.clone();
        }
        if let Some(port) = env.get("GLYPHGATE_PORT").and_then(|p| p.parse().ok()) {
            self.gateway.port = port;
        }
        if let Some(path) = env.get("GLYPHGATE_TESSERACT") {
            self.ocr.tesseract_path = path.clone();
        }
        if let Some(langs) = env.get("GLYPHGATE_LANGS") {
            self.ocr.languages = langs
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(level) = env.get("RUST_LOG") {
            self.logging.level = level.clone();
        }
    }
}
