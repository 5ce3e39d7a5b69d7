//! Batch mode: ranks a JSON document of jobs read in one go.
//!
//! Accepted shapes:
//! - a bare array of jobs (no preferences)
//! - an object `{"jobs": [...], "preferences": {...}}`
//!
//! A document carrying no jobs (`null`, `{}`, `[]`, `""`, `0`, `false`) ranks
//! nothing and is not an error.

use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::matching::models::{JobRecord, PreferenceProfile, ScoredJob};
use crate::matching::pipeline::filter_and_rank;

/// Ranks the jobs described by `input`. Blank input yields an empty result.
pub fn run_batch(input: &str) -> Result<Vec<ScoredJob>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let document: Value = serde_json::from_str(input).context("Input is not valid JSON")?;
    let (jobs, preferences) = split_document(document)?;
    Ok(filter_and_rank(jobs, &preferences))
}

fn split_document(document: Value) -> Result<(Vec<JobRecord>, PreferenceProfile)> {
    if is_empty_value(&document) {
        return Ok((Vec::new(), PreferenceProfile::default()));
    }

    match document {
        Value::Object(mut map) if map.contains_key("jobs") => {
            let jobs = match map.remove("jobs") {
                Some(jobs) if !is_empty_value(&jobs) => {
                    serde_json::from_value(jobs).context("Invalid 'jobs' list")?
                }
                _ => Vec::new(),
            };
            let preferences = match map.remove("preferences") {
                Some(Value::Null) | None => PreferenceProfile::default(),
                Some(prefs) => {
                    serde_json::from_value(prefs).context("Invalid 'preferences' object")?
                }
            };
            Ok((jobs, preferences))
        }
        Value::Array(_) => {
            let jobs = serde_json::from_value(document).context("Invalid job list")?;
            Ok((jobs, PreferenceProfile::default()))
        }
        _ => bail!("Expected a job list or an object with a 'jobs' key"),
    }
}

/// JSON values that carry no jobs at all.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
