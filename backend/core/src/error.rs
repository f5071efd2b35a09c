use thiserror::Error;

/// Top-level error type for the TextLens runtime.
#[derive(Debug, Error)]
pub enum LensError {
    #[error("credential error: {0}")]
    Credential(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("OCR provider error ({provider}): {message}")]
    Provider { provider: String, message: String },

    #[error("empty image payload")]
    EmptyUpload,

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
