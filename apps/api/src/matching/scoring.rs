//! Relevance scoring: pluggable, trait-based scorer that measures a job posting
//! against a preference profile.
//!
//! Default: `KeywordRelevanceScorer` (substring signals, deterministic).
//! `AppState` holds an `Arc<dyn RelevanceScorer>`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::models::{JobRecord, PreferenceProfile};
use crate::matching::skills::extract_skills;
use crate::matching::vocabulary::REPUTABLE_COMPANIES;
use crate::matching::weights::Weights;

/// Per-signal contributions. `total` is their clamped sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RelevanceBreakdown {
    pub title: f64,
    pub location: f64,
    pub skills: f64,
    pub company: f64,
    pub total: f64,
}

/// Implement this to swap scoring backends without touching the pipeline or
/// the handlers.
pub trait RelevanceScorer: Send + Sync {
    fn breakdown(&self, job: &JobRecord, preferences: &PreferenceProfile) -> RelevanceBreakdown;

    /// Final score in `[0.0, 1.0]`.
    fn score(&self, job: &JobRecord, preferences: &PreferenceProfile) -> f64 {
        self.breakdown(job, preferences).total
    }
}

/// Keyword scorer with four independent signals:
///
/// 1. title: share of preference keywords found in the job title
/// 2. location: either location string contains the other
/// 3. skills: share of the user's skills found in the job text
/// 4. company: flat bonus for a reputable employer
///
/// Each signal is scaled by its weight and the sum is capped at 1.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordRelevanceScorer {
    pub weights: Weights,
}

impl KeywordRelevanceScorer {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }
}

impl RelevanceScorer for KeywordRelevanceScorer {
    fn breakdown(&self, job: &JobRecord, preferences: &PreferenceProfile) -> RelevanceBreakdown {
        let title = title_signal(job, preferences) * self.weights.title;
        let location = location_signal(job, preferences) * self.weights.location;
        let skills = skills_signal(job, preferences) * self.weights.skills;
        let company = company_signal(job) * self.weights.company;

        RelevanceBreakdown {
            title,
            location,
            skills,
            company,
            total: (title + location + skills + company).clamp(0.0, 1.0),
        }
    }
}

/// Convenience wrapper over the default keyword scorer.
pub fn score_job(job: &JobRecord, preferences: &PreferenceProfile) -> f64 {
    KeywordRelevanceScorer::default().score(job, preferences)
}

fn title_signal(job: &JobRecord, preferences: &PreferenceProfile) -> f64 {
    let Some(wanted) = preferences.job_title.as_deref() else {
        return 0.0;
    };
    let wanted = wanted.to_lowercase();
    let keywords: Vec<&str> = wanted.split_whitespace().collect();
    if keywords.is_empty() {
        return 0.0;
    }

    let job_title = job.title().to_lowercase();
    let found = keywords.iter().filter(|kw| job_title.contains(*kw)).count();
    found as f64 / keywords.len() as f64
}

fn location_signal(job: &JobRecord, preferences: &PreferenceProfile) -> f64 {
    let wanted = match preferences.location.as_deref() {
        Some(l) if !l.is_empty() => l.to_lowercase(),
        _ => return 0.0,
    };
    // An empty job location is contained in every preference and matches.
    let job_location = job.location().to_lowercase();
    if job_location.contains(&wanted) || wanted.contains(&job_location) {
        1.0
    } else {
        0.0
    }
}

fn skills_signal(job: &JobRecord, preferences: &PreferenceProfile) -> f64 {
    let user_skills = user_skill_set(preferences);
    if user_skills.is_empty() {
        return 0.0;
    }

    let job_text = format!("{} {}", job.description(), job.title());
    let job_skills = extract_skills(&job_text);
    if job_skills.is_empty() {
        return 0.0;
    }

    let matched = user_skills
        .iter()
        .filter(|s| job_skills.contains(s.as_str()))
        .count();
    matched as f64 / user_skills.len() as f64
}

fn company_signal(job: &JobRecord) -> f64 {
    let company = job.company().to_lowercase();
    if REPUTABLE_COMPANIES.iter().any(|c| company.contains(c)) {
        1.0
    } else {
        0.0
    }
}

/// Declared skills (comma-split, trimmed, lowercased) plus resume skills as given.
/// A trailing or doubled comma yields an empty entry that still counts toward
/// the total.
fn user_skill_set(preferences: &PreferenceProfile) -> HashSet<String> {
    let mut skills = HashSet::new();
    if let Some(declared) = preferences.skills.as_deref().filter(|s| !s.is_empty()) {
        skills.extend(declared.split(',').map(|s| s.trim().to_lowercase()));
    }
    if let Some(resume) = &preferences.resume_skills {
        skills.extend(resume.iter().cloned());
    }
    skills
}
