//! OCR endpoint (`POST /ocr`, `OPTIONS /ocr`).
//!
//! Contract: this route always answers HTTP 200 with a JSON body carrying a
//! `success` flag; every failure class (missing image, bad base64, engine
//! fault, malformed JSON) is reported in-band as `{success: false, error}`.
//! The body is parsed inside the handler rather than through the `Json`
//! extractor so that parse failures stay on that contract instead of
//! surfacing as 4xx rejections.

use axum::{body::Bytes, extract::State, Json};
use serde_json::{json, Value};
use tracing::error;

use glyphgate_core::{decode_image_payload, GlyphError, OcrRequest, OcrResponse};

use crate::server::GatewayState;

/// Handler for `POST /ocr`.
pub async fn handle_ocr(State(state): State<GatewayState>, body: Bytes) -> Json<OcrResponse> {
    Json(process(&state, &body).await)
}

async fn process(state: &GatewayState, body: &[u8]) -> OcrResponse {
    let request: OcrRequest = match serde_json::from_slice(body) {
        Ok(req) => req,
        Err(e) => {
            // Catch-all branch: malformed body. Logged for the operator,
            // reported in-band to the caller.
            error!(error = %e, "failed to parse OCR request body");
            return OcrResponse::failure(e.to_string());
        }
    };

    let raw = request.image.unwrap_or_default();

    let image = match decode_image_payload(&raw) {
        Ok(bytes) => bytes,
        Err(e) => return e.into(),
    };

    match state.recognizer.recognize(&image).await {
        Ok(text) => OcrResponse::ok(text),
        Err(e) => {
            if let GlyphError::Other(ref inner) = e {
                error!(error = %inner, "OCR handler fault");
            }
            e.into()
        }
    }
}

/// Handler for `OPTIONS /ocr`. Answers CORS preflight with an empty object.
pub async fn ocr_preflight() -> Json<Value> {
    Json(json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use glyphgate_ocr::{FixedRecognizer, TextRecognizer};

    fn state_with(recognizer: impl TextRecognizer + 'static) -> GatewayState {
        GatewayState::new(Arc::new(recognizer))
    }

    async fn post(state: &GatewayState, body: &str) -> Value {
        serde_json::to_value(process(state, body.as_bytes()).await).unwrap()
    }

    #[tokio::test]
    async fn successful_recognition_passes_text_through() {
        let state = state_with(FixedRecognizer::new("ABCD"));
        // 1x1 PNG is irrelevant for the stub; any base64 payload works.
        let resp = post(&state, r#"{"image": "aGVsbG8="}"#).await;
        assert_eq!(resp, json!({"success": true, "text": "ABCD"}));
    }

    #[tokio::test]
    async fn data_uri_prefix_is_stripped() {
        let state = state_with(FixedRecognizer::new("ABCD"));
        let resp = post(&state, r#"{"image": "data:image/png;base64,aGVsbG8="}"#).await;
        assert_eq!(resp, json!({"success": true, "text": "ABCD"}));
    }

    #[tokio::test]
    async fn empty_image_yields_exact_error() {
        let state = state_with(FixedRecognizer::new("ABCD"));
        let resp = post(&state, r#"{"image": ""}"#).await;
        assert_eq!(
            resp,
            json!({"success": false, "error": "No image data provided"})
        );
    }

    #[tokio::test]
    async fn missing_image_key_yields_exact_error() {
        let state = state_with(FixedRecognizer::new("ABCD"));
        let resp = post(&state, r#"{}"#).await;
        assert_eq!(
            resp,
            json!({"success": false, "error": "No image data provided"})
        );
    }

    #[tokio::test]
    async fn invalid_base64_mentions_decode_failure() {
        let state = state_with(FixedRecognizer::new("ABCD"));
        let resp = post(&state, r#"{"image": "not-base64-!!"}"#).await;
        assert_eq!(resp["success"], json!(false));
        let message = resp["error"].as_str().unwrap();
        assert!(
            message.starts_with("Failed to decode base64 image:"),
            "{message}"
        );
    }

    #[tokio::test]
    async fn engine_fault_is_reported_in_band() {
        struct Failing;

        #[async_trait::async_trait]
        impl TextRecognizer for Failing {
            fn name(&self) -> &'static str {
                "failing"
            }
            async fn recognize(&self, _image: &[u8]) -> Result<String, GlyphError> {
                Err(GlyphError::Recognition("model exploded".into()))
            }
        }

        let state = state_with(Failing);
        let resp = post(&state, r#"{"image": "aGVsbG8="}"#).await;
        assert_eq!(
            resp,
            json!({"success": false, "error": "OCR processing failed: model exploded"})
        );
    }

    #[tokio::test]
    async fn malformed_json_is_caught_in_band() {
        let state = state_with(FixedRecognizer::new("ABCD"));
        let resp = post(&state, "this is not json").await;
        assert_eq!(resp["success"], json!(false));
        assert!(resp["error"].as_str().is_some());
    }

    #[tokio::test]
    async fn sequential_requests_are_independent() {
        let state = state_with(FixedRecognizer::new("ABCD"));
        let first = post(&state, r#"{"image": "aGVsbG8="}"#).await;
        let second = post(&state, r#"{"image": "aGVsbG8="}"#).await;
        assert_eq!(first, second);
        assert_eq!(first, json!({"success": true, "text": "ABCD"}));
    }

    #[tokio::test]
    async fn preflight_returns_empty_object() {
        let Json(body) = ocr_preflight().await;
        assert_eq!(body, json!({}));
    }
}
