use std::sync::Arc;

use crate::config::Config;
use crate::matching::scoring::{KeywordRelevanceScorer, RelevanceScorer};
use crate::resume::extractor::{PdfTextExtractor, ResumeTextExtractor};

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable relevance scorer. Default: KeywordRelevanceScorer.
    pub scorer: Arc<dyn RelevanceScorer>,
    /// Pluggable resume text backend. Default: PdfTextExtractor.
    pub resume_extractor: Arc<dyn ResumeTextExtractor>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            scorer: Arc::new(KeywordRelevanceScorer::default()),
            resume_extractor: Arc::new(PdfTextExtractor),
        }
    }
}
