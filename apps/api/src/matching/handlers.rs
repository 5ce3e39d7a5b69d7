//! Axum route handlers for job filtering.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::matching::models::{JobRecord, PreferenceProfile, ScoredJob};
use crate::matching::pipeline::rank_jobs;
use crate::state::AppState;

/// Body of `POST /filter`. Both keys are optional; `null` reads as absent.
#[derive(Debug, Default, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub jobs: Option<Vec<JobRecord>>,
    #[serde(default)]
    pub preferences: Option<PreferenceProfile>,
}

/// POST /filter
///
/// Scores the submitted jobs against the preferences and returns the top
/// matches, best first.
pub async fn handle_filter(
    State(state): State<AppState>,
    Json(request): Json<FilterRequest>,
) -> Json<Vec<ScoredJob>> {
    let jobs = request.jobs.unwrap_or_default();
    let preferences = request.preferences.unwrap_or_default();
    let submitted = jobs.len();

    let ranked = rank_jobs(state.scorer.as_ref(), jobs, &preferences);

    info!(submitted, returned = ranked.len(), "Filtered job postings");
    Json(ranked)
}
