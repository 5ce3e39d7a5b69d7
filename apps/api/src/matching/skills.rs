//! Skill extraction: finds vocabulary skills mentioned in free text.

use std::collections::BTreeSet;

use crate::matching::vocabulary::SKILL_VOCABULARY;

/// Returns every vocabulary skill that occurs in `text`.
///
/// Matching is a case-insensitive substring test with no word boundaries, so
/// "go" is found inside "mango" and "java" inside "javascript".
pub fn extract_skills(text: &str) -> BTreeSet<&'static str> {
    extract_skills_ordered(text).into_iter().collect()
}

/// Like [`extract_skills`] but keeps vocabulary order.
pub fn extract_skills_ordered(text: &str) -> Vec<&'static str> {
    let text_lower = text.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .copied()
        .filter(|skill| text_lower.contains(skill))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_case_insensitively() {
        let skills = extract_skills("We use PYTHON, Docker and PostgreSQL daily");
        assert!(skills.contains("python"));
        assert!(skills.contains("docker"));
        assert!(skills.contains("postgresql"));
        assert!(skills.contains("sql"));
    }

    #[test]
    fn test_multi_word_and_punctuated_skills() {
        let skills = extract_skills("Machine Learning with scikit-learn behind a REST API, C# and C++");
        for expected in ["machine learning", "scikit-learn", "rest api", "c#", "c++"] {
            assert!(skills.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(extract_skills("").is_empty());
        assert!(extract_skills("   \n\t").is_empty());
    }

    #[test]
    fn test_no_duplicates_for_repeated_mentions() {
        let skills = extract_skills("rust rust RUST Rust");
        assert_eq!(skills.len(), 1);
    }

    // Known quirk: substring matching ignores word boundaries.
    #[test]
    fn test_substring_without_word_boundary_matches() {
        let skills = extract_skills("Fresh mango smoothies");
        assert!(skills.contains("go"));

        let skills = extract_skills("javascript only");
        assert!(skills.contains("java"));
        assert!(skills.contains("javascript"));
    }

    #[test]
    fn test_ordered_variant_follows_vocabulary_order() {
        let skills = extract_skills_ordered("rust, docker, python");
        assert_eq!(skills, vec!["python", "docker", "rust"]);
    }
}
