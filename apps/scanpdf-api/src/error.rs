//! Error types for the scanPDF API server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use scanpdf_core::ConvertError;
use serde::Serialize;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No file found in the upload")]
    MissingFile,

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    size_mb: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut size_mb = None;

        let (status, code, message) = match &self {
            ApiError::MissingFile => (
                StatusCode::BAD_REQUEST,
                "MISSING_FILE",
                "No file found in the upload".to_string(),
            ),
            ApiError::UnsupportedMediaType(mime) => (
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_MEDIA_TYPE",
                format!("Only JPG or PNG images are supported, got '{}'", mime),
            ),
            ApiError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
            }
            ApiError::Convert(ConvertError::InvalidImage(msg)) => (
                StatusCode::BAD_REQUEST,
                "INVALID_IMAGE",
                format!("Could not decode image: {}", msg),
            ),
            ApiError::Convert(ConvertError::PdfTooLarge {
                size_bytes,
                allow_lower_resolution_attempt,
            }) => {
                size_mb = Some(format!("{:.2}", *size_bytes as f64 / (1024.0 * 1024.0)));
                // INITIAL means only the standard path was tried and the
                // caller may retry with reduceResolution; FINAL means the
                // reduced path was exhausted too.
                let code = if *allow_lower_resolution_attempt {
                    "PDF_TOO_LARGE_FINAL"
                } else {
                    "PDF_TOO_LARGE_INITIAL"
                };
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    code,
                    "The resulting PDF exceeds the 1 MB size limit".to_string(),
                )
            }
            ApiError::Convert(e) => {
                tracing::error!("Conversion error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An error occurred while converting the file".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An error occurred while converting the file".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            success: false,
            error: message,
            code: code.to_string(),
            size_mb,
        };

        (status, Json(body)).into_response()
    }
}
