//! HTTP handlers for the scanPDF API
//!
//! Provides REST endpoints for:
//! - Image-to-PDF conversion (multipart upload)
//! - Health checks

use axum::{
    extract::Multipart,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use scanpdf_core::{convert_image_to_pdf, ConvertOptions};

use crate::error::ApiError;
use crate::filename::{format_dd_mm_yy, resolve_date};

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "scanpdf-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// The fields taken from the upload form.
struct ConvertUpload {
    file: Option<(Vec<u8>, String)>,
    date: Option<String>,
    reduce_resolution: bool,
}

/// Handler: POST /api/convert
///
/// Accepts a multipart form with a `file` part (JPEG or PNG), an optional
/// `date` (`YYYY-MM-DD`, names the output file), and an optional
/// `reduceResolution` flag (`"true"` permits the search to descend below the
/// standard resolution — a retry the client triggers after user
/// confirmation; the server keeps no memory of prior attempts).
pub async fn handle_convert(multipart: Multipart) -> Result<Response, ApiError> {
    let upload = read_upload(multipart).await?;

    let (image_bytes, mime) = upload.file.ok_or(ApiError::MissingFile)?;
    if !scanpdf_core::is_supported_media_type(&mime) {
        return Err(ApiError::UnsupportedMediaType(mime));
    }

    let options = ConvertOptions {
        allow_lower_resolution: upload.reduce_resolution,
        ..Default::default()
    };

    debug!(
        bytes = image_bytes.len(),
        mime = %mime,
        reduce_resolution = options.allow_lower_resolution,
        "converting upload"
    );

    // The conversion is CPU-bound; keep it off the async executor.
    let pdf = tokio::task::spawn_blocking(move || convert_image_to_pdf(&image_bytes, &options))
        .await
        .map_err(|e| ApiError::Internal(format!("conversion task failed: {}", e)))??;

    let filename = format!("{}.pdf", format_dd_mm_yy(resolve_date(upload.date.as_deref())));
    info!(size = pdf.len(), filename = %filename, "conversion succeeded");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        pdf,
    )
        .into_response())
}

async fn read_upload(mut multipart: Multipart) -> Result<ConvertUpload, ApiError> {
    let mut upload = ConvertUpload {
        file: None,
        date: None,
        reduce_resolution: false,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidRequest(format!("Malformed multipart body: {}", e)))?
    {
        match field.name() {
            Some("file") => {
                let mime = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::InvalidRequest(format!("Failed to read file: {}", e)))?;
                upload.file = Some((bytes.to_vec(), mime));
            }
            Some("date") => {
                upload.date = Some(field.text().await.map_err(|e| {
                    ApiError::InvalidRequest(format!("Failed to read date field: {}", e))
                })?);
            }
            Some("reduceResolution") => {
                let value = field.text().await.map_err(|e| {
                    ApiError::InvalidRequest(format!("Failed to read reduceResolution: {}", e))
                })?;
                upload.reduce_resolution = value == "true";
            }
            _ => {}
        }
    }

    Ok(upload)
}
