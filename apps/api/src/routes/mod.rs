pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers::handle_filter;
use crate::resume::handlers::handle_analyze_resume;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/filter", post(handle_filter))
        .route(
            "/analyze-resume",
            post(handle_analyze_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .fallback(not_found)
        .with_state(state)
}
