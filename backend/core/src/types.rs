//! Wire types for the `/ocr` endpoint.

use serde::{Deserialize, Serialize};

use crate::GlyphError;

/// Request body for `POST /ocr`. Only the `image` key is read; anything else
/// in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct OcrRequest {
    #[serde(default)]
    pub image: Option<String>,
}

/// Response body for `POST /ocr`: `success` plus exactly one of `text` or
/// `error`. The absent field is omitted from the JSON, not serialized as null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OcrResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OcrResponse {
    /// Successful recognition result.
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: Some(text.into()),
            error: None,
        }
    }

    /// Failed request with a caller-visible message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            text: None,
            error: Some(message.into()),
        }
    }
}

impl From<GlyphError> for OcrResponse {
    fn from(err: GlyphError) -> Self {
        Self::failure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_omits_error_field() {
        let json = serde_json::to_value(OcrResponse::ok("ABCD")).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "text": "ABCD"}));
    }

    #[test]
    fn failure_response_omits_text_field() {
        let json = serde_json::to_value(OcrResponse::failure("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "boom"}));
    }

    #[test]
    fn request_ignores_unknown_keys() {
        let req: OcrRequest =
            serde_json::from_str(r#"{"image": "abc", "extra": 42}"#).unwrap();
        assert_eq!(req.image.as_deref(), Some("abc"));
    }

    #[test]
    fn request_tolerates_missing_image_key() {
        let req: OcrRequest = serde_json::from_str("{}").unwrap();
        assert!(req.image.is_none());
    }

    #[test]
    fn missing_image_error_maps_to_exact_message() {
        let resp: OcrResponse = crate::GlyphError::MissingImage.into();
        assert_eq!(resp, OcrResponse::failure("No image data provided"));
    }
}
