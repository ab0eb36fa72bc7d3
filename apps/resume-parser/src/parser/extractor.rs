//! Skill extraction — pluggable, trait-based extractor over raw resume text.
//!
//! Default: `TitleCaseExtractor` (pure, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn SkillExtractor>`, chosen at startup.

use std::collections::BTreeSet;

use crate::parser::models::ParseResponse;
use crate::parser::title_case::{clean_token, is_title_case, split_tokens};

/// Implement this to swap extraction backends without touching the handler.
///
/// Extraction is total: every string input produces a response.
pub trait SkillExtractor: Send + Sync {
    fn extract(&self, resume_text: &str) -> ParseResponse;

    /// Short backend label, logged at startup.
    fn name(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// TitleCaseExtractor — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Keyword extractor that treats every capitalised word as a potential skill.
///
/// Algorithm:
/// 1. Split on runs of whitespace (`split_tokens`).
/// 2. Strip leading/trailing `,` and `.` from each token.
/// 3. Keep tokens that pass `is_title_case`.
/// 4. Deduplicate and sort by code point (`BTreeSet` order).
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleCaseExtractor;

impl SkillExtractor for TitleCaseExtractor {
    fn extract(&self, resume_text: &str) -> ParseResponse {
        let mut token_count = 0usize;
        let skills: BTreeSet<&str> = split_tokens(resume_text)
            .inspect(|_| token_count += 1)
            .map(clean_token)
            .filter(|token| is_title_case(token))
            .collect();

        tracing::debug!(
            tokens = token_count,
            skills = skills.len(),
            "Extracted skills from resume text"
        );

        ParseResponse::from_skills(skills.into_iter().map(str::to_string).collect())
    }

    fn name(&self) -> &'static str {
        "title-case"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = r#"
        Jane Doe — Backend Engineer
        Experience: 6 years building services in Rust, Go, and Python.
        Led migration of billing to Kubernetes. Mentored 4 engineers.
        Skills: Rust, Go, Python, PostgreSQL, C++, Docker.
    "#;

    fn extract(text: &str) -> ParseResponse {
        TitleCaseExtractor.extract(text)
    }

    #[test]
    fn test_empty_input_yields_no_skills() {
        let response = extract("");
        assert!(response.skills.is_empty());
        assert_eq!(response.summary, "Extracted 0 potential skills.");
    }

    #[test]
    fn test_whitespace_only_input_yields_no_skills() {
        let response = extract(" \t\n  \r\n ");
        assert!(response.skills.is_empty());
        assert_eq!(response.summary, "Extracted 0 potential skills.");
    }

    #[test]
    fn test_repeated_words_are_deduplicated() {
        let response = extract("Python Python Python");
        assert_eq!(response.skills, vec!["Python"]);
        assert_eq!(response.summary, "Extracted 1 potential skills.");
    }

    #[test]
    fn test_commas_and_periods_are_stripped() {
        let response = extract("Go, Rust.");
        assert_eq!(response.skills, vec!["Go", "Rust"]);
        assert_eq!(response.summary, "Extracted 2 potential skills.");
    }

    #[test]
    fn test_only_title_case_form_qualifies() {
        let response = extract("JAVA java Java");
        assert_eq!(response.skills, vec!["Java"]);
    }

    #[test]
    fn test_numbers_and_cpp_are_excluded() {
        let response = extract("2024 Skills: C++");
        assert!(!response.skills.contains(&"2024".to_string()));
        assert!(!response.skills.contains(&"C++".to_string()));
        assert_eq!(response.skills, vec!["Skills:"]);
        assert_eq!(response.summary, "Extracted 1 potential skills.");
    }

    #[test]
    fn test_tabs_and_non_breaking_spaces_separate_tokens() {
        let response = extract("Go\tRust\u{a0}Python\u{a0}\u{a0}Zig");
        assert_eq!(response.skills, vec!["Go", "Python", "Rust", "Zig"]);
    }

    #[test]
    fn test_information_separators_separate_tokens() {
        let response = extract("Go\u{1f}Rust Python");
        assert_eq!(response.skills, vec!["Go", "Python", "Rust"]);
        assert_eq!(response.summary, "Extracted 3 potential skills.");
    }

    #[test]
    fn test_comma_without_space_keeps_one_token() {
        let response = extract("Go,Rust Python");
        assert_eq!(response.skills, vec!["Python"]);
    }

    #[test]
    fn test_output_is_sorted_by_code_point() {
        let response = extract("Zig Ada Élan Basic Ada");
        // 'É' (U+00C9) sorts after every ASCII letter.
        assert_eq!(response.skills, vec!["Ada", "Basic", "Zig", "Élan"]);
    }

    #[test]
    fn test_sample_resume() {
        let response = extract(SAMPLE_RESUME);
        assert_eq!(
            response.skills,
            vec![
                "Backend",
                "Docker",
                "Doe",
                "Engineer",
                "Experience:",
                "Go",
                "Jane",
                "Kubernetes",
                "Led",
                "Mentored",
                "Python",
                "Rust",
                "Skills:",
            ]
        );
        assert_eq!(response.summary, "Extracted 13 potential skills.");
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let first = extract(SAMPLE_RESUME);
        let second = extract(SAMPLE_RESUME);
        assert_eq!(first, second);
    }

    #[test]
    fn test_skills_strictly_ascending_and_count_matches_summary() {
        let inputs = [
            "",
            "Go",
            "rust Rust RUST Rust.",
            SAMPLE_RESUME,
            "Ada, Ada. ,Ada, Basic Cobol Basic",
        ];
        for input in inputs {
            let response = extract(input);
            assert!(
                response.skills.windows(2).all(|w| w[0] < w[1]),
                "not strictly ascending for {input:?}: {:?}",
                response.skills
            );
            assert_eq!(
                response.summary,
                format!("Extracted {} potential skills.", response.skills.len())
            );
        }
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(TitleCaseExtractor.name(), "title-case");
    }
}
