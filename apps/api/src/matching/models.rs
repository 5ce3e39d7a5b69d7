use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A job posting as supplied by the caller.
///
/// Only the four text fields take part in scoring. Everything else the caller
/// sent is kept in `extra` and echoed back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Score left over from an earlier ranking pass. Ignored and never echoed;
    /// the score is always recomputed.
    #[serde(default, skip_serializing)]
    pub relevance_score: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobRecord {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn company(&self) -> &str {
        self.company.as_deref().unwrap_or_default()
    }
}

/// Desired job attributes. Every field is optional; an absent field simply
/// contributes nothing to the score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Comma-separated, user-declared skills.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    /// Skills detected in an uploaded resume, already lowercase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_skills: Option<Vec<String>>,
}

/// A job together with the relevance score it earned. Serializes as the
/// original job object with one extra `relevance_score` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobRecord,
    pub relevance_score: f64,
}

impl ScoredJob {
    pub fn into_job(self) -> JobRecord {
        self.job
    }
}
