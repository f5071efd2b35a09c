pub mod annotation;
pub mod detector;
pub mod error;
pub mod format;

pub use annotation::{full_text, TextAnnotation};
pub use detector::TextDetector;
pub use error::LensError;
pub use format::ImageFormat;
