use async_trait::async_trait;

use crate::annotation::TextAnnotation;
use crate::error::LensError;

/// Trait for OCR backends that detect text in an image.
///
/// The gateway talks to this seam only; the concrete Google Vision client
/// lives in `textlens-vision`. An `Ok` with an empty vector means the
/// provider saw no text, which is not an error.
#[async_trait]
pub trait TextDetector: Send + Sync {
    /// Provider name (e.g., "google-vision").
    fn provider_name(&self) -> &str;

    /// Detect text annotations in the given raw image bytes.
    ///
    /// Makes exactly one outbound call per invocation; no retries.
    async fn detect_text(&self, image: &[u8]) -> Result<Vec<TextAnnotation>, LensError>;

    /// Full recognized text of the image, when any.
    ///
    /// `None` means the provider found no text, which is not an error.
    async fn extract_text(&self, image: &[u8]) -> Result<Option<String>, LensError> {
        let annotations = self.detect_text(image).await?;
        Ok(crate::annotation::full_text(&annotations).map(str::to_owned))
    }
}
