// Heuristic field extraction over already-extracted resume text.
// Pure functions only: no I/O, no shared mutable state.

pub mod basics;
pub mod patterns;
pub mod skills;

/// Trimmed, non-empty lines in order.
pub(crate) fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// The first `max_chars` characters of `s` (not bytes).
pub(crate) fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
