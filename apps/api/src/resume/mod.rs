// Resume analysis: document text extraction and keyword-based profiling.
// Shares the skill vocabulary with `matching`.

pub mod analyzer;
pub mod extractor;
pub mod handlers;
