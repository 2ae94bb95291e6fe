//! Axum route handler for PDF text extraction.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractPdfRequest {
    /// Raw PDF bytes, sent by the browser as a JSON array of numbers.
    pub pdf_data: Option<Vec<u8>>,
}

#[derive(Debug, Serialize)]
pub struct ExtractPdfResponse {
    pub text: String,
}

/// POST /api/extract-pdf
///
/// Extracts text from raw PDF bytes. An empty upload or a PDF with no
/// extractable text is a 400 whose body carries a placeholder `text` field,
/// so the client can still render something; a parser failure is a 500 with
/// its own placeholder.
pub async fn handle_extract_pdf(
    Json(request): Json<ExtractPdfRequest>,
) -> Result<Json<ExtractPdfResponse>, AppError> {
    let pdf_data = request
        .pdf_data
        .ok_or_else(|| AppError::Validation("PDF data is required as byte array".to_string()))?;

    if pdf_data.is_empty() {
        return Err(AppError::EmptyPdf);
    }

    info!("Extracting text from PDF ({} bytes)", pdf_data.len());

    // pdf-extract is synchronous and CPU-bound; keep it off the async workers.
    let extracted = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&pdf_data)
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?
    .map_err(|e| AppError::PdfExtraction(e.to_string()))?;

    let text = extracted.trim().to_string();

    if text.is_empty() {
        return Err(AppError::EmptyPdf);
    }

    info!("PDF extraction complete ({} chars)", text.len());

    Ok(Json(ExtractPdfResponse { text }))
}
