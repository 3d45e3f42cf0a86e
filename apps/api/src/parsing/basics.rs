use serde::{Deserialize, Serialize};

use crate::parsing::patterns::{ASCII_LETTER_RE, EMAIL_RE, PHONE_RE};
use crate::parsing::{non_empty_lines, truncate_chars};

/// Lines examined when looking for the candidate's name.
const NAME_SEARCH_LINES: usize = 10;
const NAME_MAX_CHARS: usize = 120;

/// Contact basics. Fields that could not be found are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Basics {
    pub name: String,
    pub email: String,
    pub phone: String,
}

pub fn extract_basics(text: &str) -> Basics {
    Basics {
        name: find_name(text),
        email: first_match(&EMAIL_RE, text),
        phone: first_match(&PHONE_RE, text),
    }
}

/// First of the leading lines that has a letter and is not an email or phone line.
fn find_name(text: &str) -> String {
    non_empty_lines(text)
        .take(NAME_SEARCH_LINES)
        .find(|line| {
            !EMAIL_RE.is_match(line) && !PHONE_RE.is_match(line) && ASCII_LETTER_RE.is_match(line)
        })
        .map(|line| truncate_chars(line, NAME_MAX_CHARS).to_string())
        .unwrap_or_default()
}

fn first_match(re: &regex::Regex, text: &str) -> String {
    re.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
