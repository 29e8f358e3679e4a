//! Sender and recipient extraction.
//!
//! Both use an ordered list of literal label patterns. Each label variant is
//! spelled out with a character class (`[Ff]rom:`) instead of a single
//! case-insensitive pattern, so `FROM:` does not match. A capture never
//! leaves the label's line, and the first pattern with a non-blank capture
//! wins: a bare `From:` line falls through to the next pattern instead of
//! reading the line below it.

use std::sync::LazyLock;

use regex::Regex;

static SENDER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"[Ff]rom:[ \t]*([^\n]*)").unwrap(),
        Regex::new(r"[Ss]ender:[ \t]*([^\n]*)").unwrap(),
        Regex::new(r"[Ss]incerely,[ \t]*([^\n]*)").unwrap(),
        Regex::new(r"[Yy]ours [Ff]aithfully,[ \t]*([^\n]*)").unwrap(),
        Regex::new(r"[Yy]ours [Ss]incerely,[ \t]*([^\n]*)").unwrap(),
    ]
});

static RECIPIENT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"[Tt]o:[ \t]*([^\n]*)").unwrap(),
        Regex::new(r"[Rr]ecipient:[ \t]*([^\n]*)").unwrap(),
        // Salutation: the capture keeps an honorific and stops at the first comma.
        Regex::new(
            r"[Dd]ear[ \t]+((?:(?:Mr|Mrs|Ms|Dr|Prof)\.?[ \t]*|Sir\b[ \t]*|Madam\b[ \t]*)?[^,\n]*)",
        )
        .unwrap(),
    ]
});

/// Who the letter is from: an explicit label or the name after a closing.
pub fn extract_sender(text: &str) -> Option<String> {
    first_capture(text, &SENDER_PATTERNS)
}

/// Who the letter is addressed to: an explicit label or the salutation.
pub fn extract_recipient(text: &str) -> Option<String> {
    first_capture(text, &RECIPIENT_PATTERNS)
}

fn first_capture(text: &str, patterns: &[Regex]) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    patterns.iter().find_map(|pattern| {
        let caps = pattern.captures(text)?;
        let value = caps.get(1)?.as_str().trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}
