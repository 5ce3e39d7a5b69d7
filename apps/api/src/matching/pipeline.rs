//! Filter & rank: keeps jobs scoring at least `MIN_RELEVANCE` and returns the
//! best `MAX_RESULTS`, highest score first.

use tracing::debug;

use crate::matching::models::{JobRecord, PreferenceProfile, ScoredJob};
use crate::matching::scoring::{KeywordRelevanceScorer, RelevanceScorer};
use crate::matching::weights::{MAX_RESULTS, MIN_RELEVANCE};

/// Ranks `jobs` with the default keyword scorer.
pub fn filter_and_rank(jobs: Vec<JobRecord>, preferences: &PreferenceProfile) -> Vec<ScoredJob> {
    rank_jobs(&KeywordRelevanceScorer::default(), jobs, preferences)
}

/// Algorithm:
/// 1. Score each job
/// 2. Keep jobs scoring at least `MIN_RELEVANCE`
/// 3. Sort descending by score; the sort is stable so ties keep input order
/// 4. Truncate to `MAX_RESULTS`
pub fn rank_jobs(
    scorer: &dyn RelevanceScorer,
    jobs: Vec<JobRecord>,
    preferences: &PreferenceProfile,
) -> Vec<ScoredJob> {
    if jobs.is_empty() {
        return Vec::new();
    }
    let total = jobs.len();

    let mut ranked: Vec<ScoredJob> = jobs
        .into_iter()
        .map(|job| {
            let relevance_score = scorer.score(&job, preferences);
            ScoredJob {
                job,
                relevance_score,
            }
        })
        .filter(|scored| scored.relevance_score >= MIN_RELEVANCE)
        .collect();
    let qualifying = ranked.len();

    ranked.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    ranked.truncate(MAX_RESULTS);

    debug!(
        total,
        qualifying,
        returned = ranked.len(),
        "Ranked job postings"
    );
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn titled(title: &str, id: usize) -> JobRecord {
        let mut job = JobRecord {
            title: Some(title.to_string()),
            ..Default::default()
        };
        job.extra.insert("id".to_string(), json!(id));
        job
    }

    fn ids(ranked: &[ScoredJob]) -> Vec<u64> {
        ranked
            .iter()
            .map(|s| s.job.extra["id"].as_u64().unwrap())
            .collect()
    }

    fn title_prefs(title: &str) -> PreferenceProfile {
        PreferenceProfile {
            job_title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input_returns_empty() {
        assert!(filter_and_rank(vec![], &PreferenceProfile::default()).is_empty());
        assert!(filter_and_rank(vec![], &title_prefs("rust developer")).is_empty());
    }

    #[test]
    fn test_worked_example_ranks_first() {
        let best: JobRecord = serde_json::from_value(json!({
            "title": "Senior Python Developer",
            "location": "Remote",
            "company": "Google",
            "description": "Use Python and AWS"
        }))
        .unwrap();
        let weaker: JobRecord = serde_json::from_value(json!({
            "title": "Python Developer",
            "location": "Berlin",
            "company": "Initech",
            "description": "Django"
        }))
        .unwrap();
        let prefs: PreferenceProfile = serde_json::from_value(json!({
            "jobTitle": "python developer",
            "location": "remote",
            "skills": "python,aws"
        }))
        .unwrap();

        let ranked = filter_and_rank(vec![weaker, best], &prefs);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].job.company(), "Google");
        assert!((ranked[0].relevance_score - 1.0).abs() < 1e-9);
        assert!(ranked[1].relevance_score < ranked[0].relevance_score);
    }

    #[test]
    fn test_below_threshold_is_dropped() {
        let jobs = vec![
            titled("Rust Developer", 0),
            titled("Accountant", 1),
            titled("Rust Sales", 2),
        ];
        // "rust sales" hits 1 of 3 keywords: 0.4 / 3 < 0.2
        let ranked = filter_and_rank(jobs, &title_prefs("rust developer intern"));
        assert_eq!(ids(&ranked), vec![0]);
        assert!(ranked.iter().all(|s| s.relevance_score >= MIN_RELEVANCE));
    }

    #[test]
    fn test_trailing_comma_in_skills_drops_job_below_threshold() {
        // {"python", ""} against {"python"}: 1/2 * 0.3 = 0.15
        let prefs = PreferenceProfile {
            skills: Some("python, ".to_string()),
            ..Default::default()
        };
        let ranked = filter_and_rank(vec![titled("Python Developer", 0)], &prefs);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // One of two keywords: exactly 0.5 * 0.4 = 0.2
        let ranked = filter_and_rank(vec![titled("Rust Wizard", 0)], &title_prefs("rust developer"));
        assert_eq!(ranked.len(), 1);
        assert!((ranked[0].relevance_score - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let jobs = vec![
            titled("Rust", 0),
            titled("Rust Developer", 1),
            titled("Rust Tester", 2),
            titled("Rust Developer Lead", 3),
            titled("Rust Ops", 4),
        ];
        let ranked = filter_and_rank(jobs, &title_prefs("rust developer"));

        assert_eq!(ids(&ranked), vec![1, 3, 0, 2, 4]);
        for pair in ranked.windows(2) {
            assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
    }

    #[test]
    fn test_truncates_to_top_twenty_keeping_input_order_for_ties() {
        // 25 qualifying jobs: the even ones score 0.4, the odd ones 0.2.
        let jobs: Vec<JobRecord> = (0..25)
            .map(|i| {
                if i % 2 == 0 {
                    titled("Rust Developer", i)
                } else {
                    titled("Rust Support", i)
                }
            })
            .collect();

        let ranked = filter_and_rank(jobs, &title_prefs("rust developer"));
        assert_eq!(ranked.len(), MAX_RESULTS);

        let expected: Vec<u64> = (0..25u64)
            .filter(|i| i % 2 == 0)
            .chain((0..25u64).filter(|i| i % 2 == 1))
            .take(MAX_RESULTS)
            .collect();
        assert_eq!(ids(&ranked), expected);
    }

    #[test]
    fn test_output_length_is_min_of_cap_and_qualifying() {
        let jobs: Vec<JobRecord> = (0..8)
            .map(|i| titled(if i < 5 { "Rust Developer" } else { "Chef" }, i))
            .collect();
        let ranked = filter_and_rank(jobs, &title_prefs("rust developer"));
        assert_eq!(ranked.len(), 5);
    }

    #[test]
    fn test_rerunning_on_output_is_idempotent() {
        let prefs: PreferenceProfile = serde_json::from_value(json!({
            "jobTitle": "rust developer",
            "skills": "rust, docker"
        }))
        .unwrap();
        let jobs: Vec<JobRecord> = (0..30)
            .map(|i| {
                let mut job = titled(if i % 3 == 0 { "Rust Developer" } else { "Rust Engineer" }, i);
                if i % 4 == 0 {
                    job.description = Some("Docker everywhere".to_string());
                }
                job
            })
            .collect();

        let first = filter_and_rank(jobs, &prefs);
        let second = filter_and_rank(
            first.iter().cloned().map(ScoredJob::into_job).collect(),
            &prefs,
        );

        assert_eq!(ids(&first), ids(&second));
        let first_scores: Vec<f64> = first.iter().map(|s| s.relevance_score).collect();
        let second_scores: Vec<f64> = second.iter().map(|s| s.relevance_score).collect();
        assert_eq!(first_scores, second_scores);
    }

    #[test]
    fn test_custom_scorer_is_used() {
        struct Constant(f64);
        impl RelevanceScorer for Constant {
            fn breakdown(
                &self,
                _job: &JobRecord,
                _preferences: &PreferenceProfile,
            ) -> crate::matching::scoring::RelevanceBreakdown {
                crate::matching::scoring::RelevanceBreakdown {
                    total: self.0,
                    ..Default::default()
                }
            }
        }

        let jobs = vec![titled("a", 0), titled("b", 1)];
        let ranked = rank_jobs(&Constant(0.5), jobs.clone(), &PreferenceProfile::default());
        assert_eq!(ids(&ranked), vec![0, 1]);

        let ranked = rank_jobs(&Constant(0.1), jobs, &PreferenceProfile::default());
        assert!(ranked.is_empty());
    }
}
