use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::scoring::keywords::extract;
use crate::scoring::ranking::rank;

/// Maximum number of matched keywords reported back to the caller.
pub const MAX_REPORTED_KEYWORDS: usize = 15;

/// Keyword overlap between a candidate document and a reference JD.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0 – 100
    pub score: u8,
    /// Matched JD keywords, most frequent first.
    pub keywords: Vec<String>,
}

/// Scores how many of the reference text's top keywords appear in the candidate text.
///
/// 1. Rank the reference keywords by frequency (top 30).
/// 2. Keep those present anywhere in the candidate's keywords.
/// 3. score = round(matched / ranked × 100); a reference with no keywords scores 0.
pub fn score(candidate_text: &str, reference_text: &str) -> MatchResult {
    let job_keywords = extract(reference_text);
    let ranked = rank(&job_keywords);

    if ranked.is_empty() {
        return MatchResult::default();
    }

    let cv_keywords = extract(candidate_text);
    let cv_set: HashSet<&str> = cv_keywords.iter().map(String::as_str).collect();

    let matched: Vec<String> = ranked
        .iter()
        .filter(|keyword| cv_set.contains(keyword.as_str()))
        .cloned()
        .collect();

    MatchResult {
        score: percentage(matched.len(), ranked.len()),
        keywords: matched.into_iter().take(MAX_REPORTED_KEYWORDS).collect(),
    }
}

// Halves round away from zero; `total` is never zero here.
fn percentage(part: usize, total: usize) -> u8 {
    ((part as f64 / total as f64) * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_empty_scores_zero() {
        assert_eq!(score("", ""), MatchResult { score: 0, keywords: vec![] });
    }

    #[test]
    fn test_empty_reference_scores_zero() {
        assert_eq!(score("anything", ""), MatchResult::default());
        // only stop words and short tokens: still nothing to match against
        assert_eq!(score("rust developer", "the and of a go js"), MatchResult::default());
    }

    #[test]
    fn test_identical_text_is_full_match() {
        let text = "Python developer needed with Python experience";
        let result = score(text, text);
        assert_eq!(result.score, 100);
        assert_eq!(result.keywords, vec!["python", "developer", "needed", "experience"]);
    }

    #[test]
    fn test_partial_match_rounds_to_nearest() {
        let result = score("I only know Java", "Java Python Go Rust");
        assert_eq!(result.keywords, vec!["java"]);
        assert_eq!(result.score, 33);
    }

    #[test]
    fn test_two_of_three_rounds_up() {
        let result = score("java and rust", "Java Python Go Rust");
        assert_eq!(result.keywords, vec!["java", "rust"]);
        assert_eq!(result.score, 67);
    }

    #[test]
    fn test_exact_half_rounds_up() {
        // 1 of 8 keywords = 12.5%
        let reference = "alpha bravo charlie delta echo foxtrot golf hotel";
        let result = score("charlie", reference);
        assert_eq!(result.score, 13);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let result = score("Gardening and cooking", "Kubernetes Terraform engineer");
        assert_eq!(result.score, 0);
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn test_matched_keywords_follow_jd_frequency_order() {
        let reference = "docker kubernetes kubernetes terraform terraform terraform";
        let result = score("terraform docker kubernetes", reference);
        assert_eq!(result.keywords, vec!["terraform", "kubernetes", "docker"]);
    }

    #[test]
    fn test_equal_frequency_keeps_jd_order() {
        let result = score("zebra apple mango", "mango zebra apple");
        assert_eq!(result.keywords, vec!["mango", "zebra", "apple"]);
    }

    #[test]
    fn test_reported_keywords_capped_at_fifteen() {
        let words: Vec<String> = (0..20).map(|i| format!("keyword{i:02}")).collect();
        let text = words.join(" ");
        let result = score(&text, &text);
        assert_eq!(result.score, 100);
        assert_eq!(result.keywords.len(), MAX_REPORTED_KEYWORDS);
        assert_eq!(result.keywords[0], "keyword00");
    }

    #[test]
    fn test_only_top_thirty_jd_keywords_count() {
        // 40 distinct JD keywords; the candidate only has ones ranked beyond 30
        let words: Vec<String> = (0..40).map(|i| format!("term{i:02}")).collect();
        let reference = words.join(" ");
        let candidate = words[30..].join(" ");
        let result = score(&candidate, &reference);
        assert_eq!(result.score, 0);
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn test_candidate_frequency_does_not_matter() {
        let once = score("rust", "rust tokio");
        let many = score("rust rust rust rust", "rust tokio");
        assert_eq!(once, many);
        assert_eq!(once.score, 50);
    }

    #[test]
    fn test_scoring_is_deterministic_and_bounded() {
        let reference = "Senior Rust Engineer. Requirements: Rust, Tokio, Axum, PostgreSQL, \
                         distributed systems, observability, Kubernetes. Rust experience required.";
        let candidate = "Built Axum services in Rust with Tokio; ran them on Kubernetes.";
        let first = score(candidate, reference);
        let second = score(candidate, reference);
        assert_eq!(first, second);
        assert!(first.score <= 100);
        assert!(first.keywords.len() <= MAX_REPORTED_KEYWORDS);
        assert_eq!(first.keywords[0], "rust");
    }

    #[test]
    fn test_match_result_serializes_for_the_form() {
        let json = serde_json::to_value(score("java", "java rust")).unwrap();
        assert_eq!(json, serde_json::json!({ "score": 50, "keywords": ["java"] }));
    }

    #[test]
    fn test_percentage_bounds() {
        assert_eq!(percentage(0, 30), 0);
        assert_eq!(percentage(30, 30), 100);
        assert_eq!(percentage(1, 6), 17);
    }
}
