//! Skills section heuristic.
//!
//! Finds a line that is only `Skills` (or `Technical Skills`), optionally followed by `:` or `-`,
//! takes up to three non-empty lines after it and splits them into short tokens. Anything
//! more structured (several skills sections, sub-headings, skills in prose) is not detected.

use std::collections::HashSet;

use crate::parsing::patterns::{
    LEGACY_SKILL_DELIMITER_RE, SKILLS_HEADER_RE, SKILL_DELIMITER_RE, TECHNICAL_SKILLS_HEADER_RE,
};
use crate::parsing::{non_empty_lines, truncate_chars};

const SECTION_LINES: usize = 3;
const SECTION_MAX_CHARS: usize = 1200;
const SKILL_MAX_CHARS: usize = 48;
const MAX_SKILLS: usize = 60;

#[derive(Debug, Clone, Copy)]
pub struct SkillsOptions {
    /// Also split on `â`, `€` and `¢` (a bullet decoded under the wrong encoding).
    pub legacy_bullets: bool,
}

impl Default for SkillsOptions {
    fn default() -> Self {
        Self {
            legacy_bullets: true,
        }
    }
}

pub fn extract_skills(text: &str, options: SkillsOptions) -> Vec<String> {
    let Some(header) = SKILLS_HEADER_RE
        .find(text)
        .or_else(|| TECHNICAL_SKILLS_HEADER_RE.find(text))
    else {
        return Vec::new();
    };

    // Newline is itself a delimiter, so a line break always ends a token.
    let section = non_empty_lines(&text[header.end()..])
        .take(SECTION_LINES)
        .collect::<Vec<_>>()
        .join("\n");
    let section = truncate_chars(&section, SECTION_MAX_CHARS);

    let delimiter = if options.legacy_bullets {
        &*LEGACY_SKILL_DELIMITER_RE
    } else {
        &*SKILL_DELIMITER_RE
    };

    let mut seen = HashSet::new();
    delimiter
        .split(section)
        .map(str::trim)
        .filter(|token| {
            let len = token.chars().count();
            (1..=SKILL_MAX_CHARS).contains(&len)
        })
        .filter(|token| seen.insert(token.to_lowercase()))
        .take(MAX_SKILLS)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(text: &str) -> Vec<String> {
        extract_skills(text, SkillsOptions::default())
    }

    #[test]
    fn test_basic_section() {
        let text = "Jane Doe\nSkills\nPython, Go, Rust\nDocker; Kubernetes";
        assert_eq!(
            skills(text),
            vec!["Python", "Go", "Rust", "Docker", "Kubernetes"]
        );
    }

    #[test]
    fn test_header_with_colon_and_case() {
        let text = "SKILLS:\nSQL | Terraform";
        assert_eq!(skills(text), vec!["SQL", "Terraform"]);
    }

    #[test]
    fn test_header_with_trailing_hyphen_and_spaces() {
        let text = "  skills -  \n• Python • Go";
        assert_eq!(skills(text), vec!["Python", "Go"]);
    }

    #[test]
    fn test_technical_skills_fallback() {
        let text = "Experience\nTechnical Skills:\nJava, Kotlin";
        assert_eq!(skills(text), vec!["Java", "Kotlin"]);
    }

    #[test]
    fn test_plain_skills_header_preferred() {
        let text = "Technical Skills\nJava\nOther\nSkills\nRust";
        assert_eq!(skills(text), vec!["Rust"]);
    }

    #[test]
    fn test_header_must_be_alone_on_line() {
        assert!(skills("Skills include Python, Go\nRust").is_empty());
        assert!(skills("Soft skills: communication").is_empty());
    }

    #[test]
    fn test_no_header_is_empty() {
        assert!(skills("Jane Doe\nExperience\nAcme Corp").is_empty());
    }

    #[test]
    fn test_only_three_lines_after_header() {
        let text = "Skills\n\nA\n\nB\nC\nD, E";
        assert_eq!(skills(text), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_dedup_is_case_insensitive_first_wins() {
        let text = "Skills\nSQL, Python, sql, PYTHON, Sql";
        assert_eq!(skills(text), vec!["SQL", "Python"]);
    }

    #[test]
    fn test_long_tokens_dropped() {
        let long = "x".repeat(49);
        let edge = "y".repeat(48);
        let text = format!("Skills\nGo, {long}, {edge}");
        assert_eq!(skills(&text), vec!["Go".to_string(), edge]);
    }

    #[test]
    fn test_capped_at_sixty() {
        let tokens: Vec<String> = (0..100).map(|i| format!("s{i}")).collect();
        let text = format!("Skills\n{}", tokens.join(","));
        let found = skills(&text);
        assert_eq!(found.len(), 60);
        assert_eq!(found[0], "s0");
        assert_eq!(found[59], "s59");
    }

    #[test]
    fn test_section_truncated_to_1200_chars() {
        // 1197 + ", R" is exactly 1200 chars; "ust" falls past the cut.
        let head = "a".repeat(1197);
        let text = format!("Skills\n{head}, Rust");
        assert_eq!(skills(&text), vec!["R"]);
    }

    #[test]
    fn test_line_break_ends_token() {
        let text = "Skills\nMachine Learning\nData Engineering";
        assert_eq!(skills(text), vec!["Machine Learning", "Data Engineering"]);
    }

    #[test]
    fn test_hyphen_splits_tokens() {
        assert_eq!(skills("Skills\nCI-CD"), vec!["CI", "CD"]);
    }

    #[test]
    fn test_legacy_bullets_toggle() {
        let text = "Skills\nPython\u{e2}\u{20ac}\u{a2}Go";
        assert_eq!(
            extract_skills(text, SkillsOptions { legacy_bullets: true }),
            vec!["Python", "Go"]
        );
        assert_eq!(
            extract_skills(text, SkillsOptions { legacy_bullets: false }),
            vec!["Python\u{e2}\u{20ac}\u{a2}Go"]
        );
    }

    #[test]
    fn test_idempotent() {
        let text = "Skills\nRust, Go, rust";
        assert_eq!(skills(text), skills(text));
    }
}
