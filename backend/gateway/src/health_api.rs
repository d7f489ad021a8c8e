//! Gateway health API (`GET /api/health`).

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::GatewayState;

#[derive(Serialize)]
pub struct HealthReport {
    pub status: String,
    pub service: String,
    pub version: String,
    pub engine: String,
}

/// Handler for `GET /api/health`.
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok".into(),
        service: "glyphgate".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        engine: state.recognizer.name().into(),
    })
}
