//! Resume text extraction: pluggable, trait-based document-to-text backend.
//!
//! Default: `PdfTextExtractor` (pdf-extract, run on the blocking pool).
//! `AppState` holds an `Arc<dyn ResumeTextExtractor>`.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

#[async_trait]
pub trait ResumeTextExtractor: Send + Sync {
    async fn extract_text(&self, document: Bytes) -> Result<String, AppError>;
}

/// Extracts the text layer of a PDF, page by page.
pub struct PdfTextExtractor;

#[async_trait]
impl ResumeTextExtractor for PdfTextExtractor {
    async fn extract_text(&self, document: Bytes) -> Result<String, AppError> {
        let size = document.len();
        // pdf-extract is CPU-bound and can panic on malformed input.
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&document))
            .await
            .map_err(|e| {
                AppError::UnprocessableEntity(format!("Error extracting text from PDF: {e}"))
            })?
            .map_err(|e| {
                AppError::UnprocessableEntity(format!("Error extracting text from PDF: {e}"))
            })?;

        debug!(bytes = size, chars = text.chars().count(), "Extracted resume text");
        Ok(text)
    }
}
