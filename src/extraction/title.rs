//! Title extraction: an explicit subject line, or else the first substantial
//! heading-like line near the top of the page.

use std::sync::LazyLock;

use regex::Regex;

/// Only the first few non-blank lines are considered as a heading.
const HEADING_SCAN_LINES: usize = 5;
/// Heading length bounds, both exclusive, in characters.
const MIN_HEADING_LEN: usize = 10;
const MAX_HEADING_LEN: usize = 100;

static SUBJECT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:subject|re|reference)\s*:\s*(.+)$").expect("subject pattern should compile")
});

/// Lines containing any of these, anywhere and in any case, are letter
/// furniture rather than a heading. Plain substrings: "Towards" counts as "to".
const HEADING_STOPWORDS: &[&str] = &[
    "date",
    "from",
    "to",
    "dear",
    "subject",
    "sincerely",
    "regards",
    "confidential",
];

pub fn extract_title(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    for line in &lines {
        if let Some(caps) = SUBJECT_LINE.captures(line) {
            let subject = caps[1].trim();
            if !subject.is_empty() {
                return Some(subject.to_string());
            }
        }
    }

    lines
        .iter()
        .take(HEADING_SCAN_LINES)
        .find(|line| is_heading_candidate(line))
        .map(|line| line.to_string())
}

fn is_heading_candidate(line: &str) -> bool {
    let len = line.chars().count();
    if len <= MIN_HEADING_LEN || len >= MAX_HEADING_LEN {
        return false;
    }
    let lowered = line.to_lowercase();
    !HEADING_STOPWORDS.iter().any(|word| lowered.contains(word))
}
