//! Image upload intake and extraction endpoint.
//!
//! One upload event triggers exactly one provider call. Rejections (no file,
//! empty payload, unsupported extension) never reach the provider.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Html;
use tracing::{error, info, warn};
use uuid::Uuid;

use logging::redact_secrets;
use textlens_core::{ImageFormat, TextDetector};

use crate::pages;
use crate::server::GatewayState;

pub const EMPTY_UPLOAD_NOTICE: &str = "업로드된 파일이 비어 있습니다.";
pub const UNSUPPORTED_FORMAT_NOTICE: &str = "jpg, jpeg, png 형식의 이미지만 올릴 수 있습니다.";
pub const EXTRACTION_FAILED_NOTICE: &str = "텍스트 추출에 실패했습니다. 잠시 후 다시 시도해 주세요.";

/// Handler for `POST /extract`.
pub async fn extract(
    State(state): State<GatewayState>,
    mut multipart: Multipart,
) -> (StatusCode, Html<String>) {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("image") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_string();
        match field.bytes().await {
            Ok(bytes) => upload = Some((filename, bytes.to_vec())),
            Err(e) => warn!(error = %e, "failed to read upload body"),
        }
        break;
    }

    let Some((filename, bytes)) = upload else {
        return (
            StatusCode::BAD_REQUEST,
            Html(pages::error_page(EMPTY_UPLOAD_NOTICE)),
        );
    };

    process_upload(state.detector.as_ref(), &filename, &bytes).await
}

/// Run one render cycle for an uploaded image.
pub(crate) async fn process_upload(
    detector: &dyn TextDetector,
    filename: &str,
    image: &[u8],
) -> (StatusCode, Html<String>) {
    let upload_id = Uuid::new_v4();

    if image.is_empty() {
        warn!(upload_id = %upload_id, filename = %filename, "rejected empty upload");
        return (
            StatusCode::BAD_REQUEST,
            Html(pages::error_page(EMPTY_UPLOAD_NOTICE)),
        );
    }

    let format = match ImageFormat::from_filename(filename) {
        Ok(format) => format,
        Err(_) => {
            warn!(upload_id = %upload_id, filename = %filename, "rejected unsupported format");
            return (
                StatusCode::BAD_REQUEST,
                Html(pages::error_page(UNSUPPORTED_FORMAT_NOTICE)),
            );
        }
    };

    info!(
        upload_id = %upload_id,
        filename = %filename,
        format = %format,
        size_bytes = image.len(),
        "received image upload"
    );

    match detector.extract_text(image).await {
        Ok(Some(text)) => {
            info!(upload_id = %upload_id, chars = text.chars().count(), "text extracted");
            (StatusCode::OK, Html(pages::result_page(filename, Some(&text))))
        }
        Ok(None) => {
            info!(upload_id = %upload_id, "no text found");
            (StatusCode::OK, Html(pages::result_page(filename, None)))
        }
        Err(e) => {
            error!(
                upload_id = %upload_id,
                error = %redact_secrets(&e.to_string()),
                "text extraction failed"
            );
            (
                StatusCode::BAD_GATEWAY,
                Html(pages::error_page(EXTRACTION_FAILED_NOTICE)),
            )
        }
    }
}
