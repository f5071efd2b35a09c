//! Accepted upload formats.
//!
//! The upload surface takes raster images only; decodability is the
//! provider's concern, extension screening is ours.

use std::fmt;

use crate::error::LensError;

/// Image formats accepted by the upload surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Map a bare file extension to a format. Case-insensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    /// Screen an uploaded filename, rejecting anything outside the accepted set.
    pub fn from_filename(name: &str) -> Result<Self, LensError> {
        let ext = name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
        Self::from_extension(ext).ok_or_else(|| LensError::UnsupportedFormat(name.to_string()))
    }

    /// MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jpeg => write!(f, "jpeg"),
            Self::Png => write!(f, "png"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_jpg_jpeg_png() {
        assert_eq!(ImageFormat::from_extension("jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("png"), Some(ImageFormat::Png));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert_eq!(ImageFormat::from_extension("JPG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("PNG"), Some(ImageFormat::Png));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(ImageFormat::from_extension("gif"), None);
        assert_eq!(ImageFormat::from_extension("pdf"), None);
        assert_eq!(ImageFormat::from_extension(""), None);
    }

    #[test]
    fn screens_filenames() {
        assert!(ImageFormat::from_filename("photo.jpeg").is_ok());
        assert!(matches!(
            ImageFormat::from_filename("notes.txt"),
            Err(LensError::UnsupportedFormat(_))
        ));
        assert!(ImageFormat::from_filename("no-extension").is_err());
    }

    #[test]
    fn mime_types() {
        assert_eq!(ImageFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(ImageFormat::Png.mime_type(), "image/png");
    }
}
