//! GlyphGate configuration: typed schema, TOML file loading, env overrides.

pub mod schema;

pub use schema::{GatewaySection, GlyphConfig, LoggingSection, OcrSection};

use anyhow::{Context, Result};
use std::path::Path;

/// Resolve the effective configuration.
///
/// Order: built-in defaults, then the TOML file (explicit path argument or
/// `$GLYPHGATE_CONFIG`, skipped when neither is set), then `GLYPHGATE_*`
/// environment variables.
pub fn load(path: Option<&Path>) -> Result<GlyphConfig> {
    let mut config = match explicit_path(path) {
        Some(p) => {
            let raw = std::fs::read_to_string(&p)
                .with_context(|| format!("reading config file {}", p.display()))?;
            toml::from_str(&raw)
                .with_context(|| format!("parsing config file {}", p.display()))?
        }
        None => GlyphConfig::default(),
    };
    config.apply_env_overrides();
    Ok(config)
}

fn explicit_path(path: Option<&Path>) -> Option<std::path::PathBuf> {
    path.map(Path::to_path_buf)
        .or_else(|| std::env::var("GLYPHGATE_CONFIG").ok().map(Into::into))
}
