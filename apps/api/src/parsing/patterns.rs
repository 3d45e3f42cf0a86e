//! Precompiled patterns shared by every request. Compiled once on first use.

use std::sync::LazyLock;

use regex::Regex;

/// `local-part@domain.tld`, case-insensitive, TLD of 2+ letters.
pub static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").expect("email pattern compiles")
});

/// North-American style number: optional `+1`/`1` prefix, area code with optional
/// parentheses, then 3 + 4 digits. Separators are any single space, dot or hyphen.
pub static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?1[\s.-]?)?(\(?\d{3}\)?[\s.-]?)\d{3}[\s.-]?\d{4}")
        .expect("phone pattern compiles")
});

pub static ASCII_LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]").expect("letter pattern compiles"));

pub static SKILLS_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*skills\s*[:\-]?\s*$").expect("skills header pattern compiles")
});

pub static TECHNICAL_SKILLS_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*technical skills\s*[:\-]?\s*$")
        .expect("technical skills header pattern compiles")
});

/// Bullets, hyphens, pipes, commas, semicolons, newlines and tabs.
pub static SKILL_DELIMITER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[\u{2022}\\-|,;\n\t]+").expect("skill delimiter pattern compiles")
});

/// Same as [`SKILL_DELIMITER_RE`] plus `â`, `€` and `¢`: the characters a UTF-8 bullet
/// turns into when read as Windows-1252. Resumes that went through that decoding
/// still split on them.
pub static LEGACY_SKILL_DELIMITER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[\u{e2}\u{20ac}\u{a2}\u{2022}\\-|,;\n\t]+")
        .expect("legacy skill delimiter pattern compiles")
});
