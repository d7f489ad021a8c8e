//! GlyphGate HTTP API Server
//!
//! Provides the `/ocr` endpoint, CORS preflight support, and the health API.

pub mod health_api;
pub mod ocr_api;
pub mod server;

pub use server::{start_server, GatewayState};
