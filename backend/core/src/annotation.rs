//! Detected text annotations.
//!
//! The OCR provider returns an ordered sequence of annotations. By provider
//! convention the first element's `description` holds the full concatenated
//! text of the whole image; the remaining elements are per-token hits.

use serde::{Deserialize, Serialize};

/// One detected text region.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnnotation {
    /// Recognized text for this region.
    pub description: String,

    /// BCP-47 language tag, when the provider reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Full recognized text of an annotation sequence.
///
/// Returns the first annotation's description, unmodified. An empty sequence
/// means the provider found no text at all.
pub fn full_text(annotations: &[TextAnnotation]) -> Option<&str> {
    annotations.first().map(|a| a.description.as_str())
}
