//! Job relevance filtering: ranks job postings against a preference profile,
//! plus the resume analysis and HTTP/batch plumbing around it.

pub mod batch;
pub mod config;
pub mod errors;
pub mod matching;
pub mod resume;
pub mod routes;
pub mod state;
