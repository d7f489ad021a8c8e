//! Main HTTP gateway server and routing.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use glyphgate_ocr::TextRecognizer;

use crate::health_api;
use crate::ocr_api;

/// Application state shared across routes.
#[derive(Clone)]
pub struct GatewayState {
    /// The OCR capability. Stateless, shared across concurrent requests.
    pub recognizer: Arc<dyn TextRecognizer>,
}

impl GatewayState {
    pub fn new(recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self { recognizer }
    }
}

/// Build the Axum router with all API routes.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route(
            "/ocr",
            post(ocr_api::handle_ocr).options(ocr_api::ocr_preflight),
        )
        .route("/api/health", get(health_api::get_health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the Axum HTTP server for the gateway.
#[instrument(skip(state))]
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = build_router(state);

    info!("Gateway HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
