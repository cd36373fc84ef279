use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use serde::Serialize;

use crate::application::ports::{FileLoaderError, InferenceBackend};
use crate::domain::{ContentType, Document};
use crate::presentation::state::AppState;

use super::error::ApiError;

const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct ProcessPdfResponse {
    pub text: String,
    pub filename: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn process_pdf_handler<B>(
    State(state): State<AppState<B>>,
    mut multipart: Multipart,
) -> Result<Json<ProcessPdfResponse>, ApiError>
where
    B: InferenceBackend + 'static,
{
    let pdf_settings = &state.settings.extraction.pdf;
    if !pdf_settings.enabled {
        return Err(ApiError::bad_request("PDF processing not available."));
    }

    let field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some(FILE_FIELD) => break field,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("PDF upload without a file field");
                return Err(ApiError::bad_request("No file uploaded"));
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return Err(ApiError::new(
                    e.status(),
                    format!("Failed to read multipart: {}", e.body_text()),
                ));
            }
        }
    };

    let filename = field.file_name().unwrap_or_default().to_string();
    if ContentType::from_filename(&filename) != Some(ContentType::Pdf) {
        tracing::warn!(filename = %filename, "Rejected non-PDF upload");
        return Err(ApiError::bad_request("Only PDF files are supported"));
    }

    let data = field.bytes().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to read file bytes");
        ApiError::new(e.status(), format!("Failed to read file: {}", e.body_text()))
    })?;

    if data.len() > pdf_settings.max_file_size_bytes() {
        return Err(ApiError::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!(
                "PDF exceeds the {} MB upload limit",
                pdf_settings.max_file_size_mb
            ),
        ));
    }

    tracing::debug!(filename = %filename, bytes = data.len(), "PDF received");

    let document = Document::new(filename.clone(), ContentType::Pdf, data.len() as u64);

    let text = state
        .pdf_loader
        .extract_text(&data, &document)
        .await
        .map_err(|e| match e {
            FileLoaderError::NoTextFound(_) => {
                ApiError::bad_request("No text could be extracted from PDF")
            }
            FileLoaderError::UnsupportedContentType(_) => {
                ApiError::bad_request("Only PDF files are supported")
            }
            FileLoaderError::ExtractionFailed(reason) => {
                tracing::warn!(error = %reason, "PDF extraction failed");
                ApiError::bad_request(format!("Error processing PDF: {}", reason))
            }
        })?;

    tracing::info!(filename = %filename, chars = text.chars().count(), "PDF processed");

    Ok(Json(ProcessPdfResponse { text, filename }))
}
