//! Resume analysis: pulls skills, seniority, and role titles out of resume text
//! and turns them into a ready-to-use preference profile.
//!
//! Keyword and regex only; no model is loaded.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::matching::models::PreferenceProfile;
use crate::matching::skills::extract_skills_ordered;

/// Title suggested when the resume names no recognizable role.
pub const FALLBACK_JOB_TITLE: &str = "Software Developer";

/// Maximum number of skills placed in the suggested `skills` string.
const SUGGESTED_SKILL_LIMIT: usize = 10;

/// Length (in characters) of the resume excerpt echoed back.
const PREVIEW_CHARS: usize = 500;

static RE_YEARS_EXPERIENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)").expect("valid regex")
});

static RE_JOB_TITLES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"software\s+(?:engineer|developer)",
        r"full\s+stack\s+developer",
        r"frontend\s+developer",
        r"backend\s+developer",
        r"data\s+(?:scientist|analyst|engineer)",
        r"machine\s+learning\s+engineer",
        r"devops\s+engineer",
        r"product\s+manager",
        r"project\s+manager",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

const SENIOR_KEYWORDS: &[&str] = &["senior", "lead", "principal", "architect"];
const JUNIOR_KEYWORDS: &[&str] = &["junior", "intern", "graduate", "entry"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    #[default]
    Associate,
    Mid,
    Director,
}

impl ExperienceLevel {
    /// <2 entry, <5 associate, <8 mid, otherwise director.
    pub fn from_years(years: u64) -> Self {
        match years {
            0..=1 => ExperienceLevel::Entry,
            2..=4 => ExperienceLevel::Associate,
            5..=7 => ExperienceLevel::Mid,
            _ => ExperienceLevel::Director,
        }
    }
}

/// Preferences derived from a resume. Deserializes directly as a
/// [`PreferenceProfile`]; `experienceLevel` is informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedPreferences {
    #[serde(flatten)]
    pub preferences: PreferenceProfile,
    #[serde(rename = "experienceLevel")]
    pub experience_level: ExperienceLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub job_titles: Vec<String>,
    pub suggested_preferences: SuggestedPreferences,
    pub resume_text: String,
}

pub fn analyze_resume_text(text: &str) -> ResumeAnalysis {
    let skills: Vec<String> = extract_skills_ordered(text)
        .into_iter()
        .map(String::from)
        .collect();
    let experience_level = extract_experience_level(text);
    let job_titles = extract_job_titles(text);

    let suggested_title = job_titles
        .first()
        .cloned()
        .unwrap_or_else(|| FALLBACK_JOB_TITLE.to_string());
    let suggested_skills = skills
        .iter()
        .take(SUGGESTED_SKILL_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let suggested_preferences = SuggestedPreferences {
        preferences: PreferenceProfile {
            job_title: Some(suggested_title),
            location: None,
            skills: (!suggested_skills.is_empty()).then_some(suggested_skills),
            resume_skills: Some(skills.clone()),
        },
        experience_level,
    };

    ResumeAnalysis {
        skills,
        experience_level,
        job_titles,
        suggested_preferences,
        resume_text: preview(text),
    }
}

/// Stated years of experience win; otherwise seniority keywords decide.
pub fn extract_experience_level(text: &str) -> ExperienceLevel {
    let text_lower = text.to_lowercase();

    if let Some(caps) = RE_YEARS_EXPERIENCE.captures(&text_lower) {
        // Digits too long for u64 still mean "a lot".
        let years = caps[1].parse::<u64>().unwrap_or(u64::MAX);
        return ExperienceLevel::from_years(years);
    }

    if SENIOR_KEYWORDS.iter().any(|w| text_lower.contains(w)) {
        ExperienceLevel::Director
    } else if JUNIOR_KEYWORDS.iter().any(|w| text_lower.contains(w)) {
        ExperienceLevel::Entry
    } else {
        ExperienceLevel::Associate
    }
}

/// Role titles found in the text, lowercase, first occurrence order.
pub fn extract_job_titles(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut titles: Vec<String> = Vec::new();

    for pattern in RE_JOB_TITLES.iter() {
        for m in pattern.find_iter(&text_lower) {
            let title = m.as_str().to_string();
            if !titles.contains(&title) {
                titles.push(title);
            }
        }
    }
    titles
}

fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
