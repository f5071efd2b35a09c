//! Wire types for the Vision `images:annotate` REST surface.
//!
//! The API is batched: a request carries a list of per-image requests and the
//! response mirrors it. This flow only ever sends one image with one
//! `TEXT_DETECTION` feature.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use textlens_core::TextAnnotation;

pub const TEXT_DETECTION: &str = "TEXT_DETECTION";

#[derive(Debug, Serialize)]
pub struct BatchAnnotateRequest {
    pub requests: Vec<AnnotateImageRequest>,
}

impl BatchAnnotateRequest {
    /// Build the single-image text-detection request for raw image bytes.
    pub fn text_detection(image: &[u8]) -> Self {
        Self {
            requests: vec![AnnotateImageRequest {
                image: ImageContent {
                    content: BASE64.encode(image),
                },
                features: vec![Feature {
                    feature_type: TEXT_DETECTION.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnnotateImageRequest {
    pub image: ImageContent,
    pub features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
pub struct ImageContent {
    /// Base64-encoded image bytes.
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchAnnotateResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    /// Absent entirely when no text was detected.
    #[serde(default)]
    pub text_annotations: Vec<TextAnnotation>,

    /// Per-image failure reported inside a 200 response.
    #[serde(default)]
    pub error: Option<RpcStatus>,
}

#[derive(Debug, Deserialize)]
pub struct RpcStatus {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_base64_content_and_feature() {
        let request = BatchAnnotateRequest::text_detection(b"fake image bytes");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["requests"][0]["features"][0]["type"], "TEXT_DETECTION");
        assert_eq!(
            json["requests"][0]["image"]["content"],
            BASE64.encode(b"fake image bytes")
        );
    }

    #[test]
    fn response_with_annotations_parses_in_order() {
        let json = r#"{
            "responses": [{
                "textAnnotations": [
                    {"description": "정지", "locale": "ko"},
                    {"description": "정지"}
                ]
            }]
        }"#;
        let parsed: BatchAnnotateResponse = serde_json::from_str(json).unwrap();
        let annotations = &parsed.responses[0].text_annotations;
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations[0].description, "정지");
    }

    #[test]
    fn missing_annotations_field_means_no_text() {
        let json = r#"{"responses": [{}]}"#;
        let parsed: BatchAnnotateResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.responses[0].text_annotations.is_empty());
        assert!(parsed.responses[0].error.is_none());
    }

    #[test]
    fn embedded_error_status_parses() {
        let json = r#"{
            "responses": [{
                "error": {"code": 3, "message": "Bad image data."}
            }]
        }"#;
        let parsed: BatchAnnotateResponse = serde_json::from_str(json).unwrap();
        let error = parsed.responses[0].error.as_ref().unwrap();
        assert_eq!(error.code, 3);
        assert_eq!(error.message, "Bad image data.");
    }
}
