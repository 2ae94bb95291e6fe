use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Placeholder text the client renders when a PDF yields no extractable text.
pub const EMPTY_PDF_TEXT: &str = "[Empty PDF - no extractable text found]";
/// Placeholder text the client renders when PDF parsing fails outright.
pub const FAILED_PDF_TEXT: &str = "[PDF extraction failed - manual input required]";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Response bodies are flat `{"error": message}` objects; the two PDF
/// variants additionally carry a `text` placeholder the client can render.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Anthropic API key not configured")]
    MissingApiKey,

    #[error("Anthropic API Error: {message}")]
    Upstream { status: u16, message: String },

    #[error("Invalid response from Anthropic API: {0}")]
    InvalidLlmResponse(String),

    #[error("No text could be extracted from the PDF")]
    EmptyPdf,

    #[error("Failed to extract text from PDF: {0}")]
    PdfExtraction(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Maps LLM client failures for endpoints that propagate upstream errors
/// rather than substituting fallback content.
impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey => AppError::MissingApiKey,
            LlmError::Api { status, message } => AppError::Upstream { status, message },
            LlmError::Http(e) => AppError::Internal(e.into()),
            LlmError::Parse(e) => AppError::InvalidLlmResponse(e.to_string()),
            LlmError::EmptyContent => {
                AppError::InvalidLlmResponse("response contained no text content".to_string())
            }
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            // Upstream failures pass the provider's status through unchanged.
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::InvalidLlmResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::EmptyPdf => StatusCode::BAD_REQUEST,
            AppError::PdfExtraction(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {self}");
        }

        let body = match &self {
            AppError::EmptyPdf => Json(json!({
                "error": self.to_string(),
                "text": EMPTY_PDF_TEXT,
            })),
            AppError::PdfExtraction(_) => Json(json!({
                "error": self.to_string(),
                "text": FAILED_PDF_TEXT,
            })),
            _ => Json(json!({ "error": self.to_string() })),
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let err = AppError::Validation("resumeText is required".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_api_key_maps_to_500() {
        assert_eq!(
            AppError::MissingApiKey.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_status_passes_through() {
        let err = AppError::Upstream {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_invalid_upstream_status_masks_to_502() {
        let err = AppError::Upstream {
            status: 0,
            message: "bogus".to_string(),
        };
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_empty_pdf_is_a_client_error() {
        assert_eq!(AppError::EmptyPdf.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_llm_error_conversion_preserves_upstream_status() {
        let err: AppError = LlmError::Api {
            status: 529,
            message: "overloaded".to_string(),
        }
        .into();
        match err {
            AppError::Upstream { status, .. } => assert_eq!(status, 529),
            other => panic!("expected Upstream, got {other:?}"),
        }
    }
}
