// Job matching core: skill extraction, relevance scoring, filter & rank.
// Pure and synchronous, no I/O below `handlers`.

pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod scoring;
pub mod skills;
pub mod vocabulary;
pub mod weights;

pub use models::{JobRecord, PreferenceProfile, ScoredJob};
pub use pipeline::{filter_and_rank, rank_jobs};
pub use scoring::{KeywordRelevanceScorer, RelevanceBreakdown, RelevanceScorer};
pub use skills::extract_skills;
