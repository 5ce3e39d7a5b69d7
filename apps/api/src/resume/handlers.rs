//! Axum route handlers for resume analysis.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::resume::analyzer::{analyze_resume_text, ResumeAnalysis};
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
pub const RESUME_FIELD: &str = "resume";

/// POST /analyze-resume
///
/// Accepts a multipart upload with a `resume` file, extracts its text, and
/// returns detected skills, seniority, titles, and suggested preferences.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }

        let document = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read resume upload: {e}")))?;

        let text = state.resume_extractor.extract_text(document).await?;
        let analysis = analyze_resume_text(&text);

        info!(
            file_name = %file_name,
            skills = analysis.skills.len(),
            experience_level = ?analysis.experience_level,
            "Analyzed resume"
        );
        return Ok(Json(analysis));
    }

    Err(AppError::Validation("No resume file provided".to_string()))
}
