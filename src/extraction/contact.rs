//! Contact extraction. An email address anywhere in the text beats any phone
//! number; phone shapes are tried in order.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
        .expect("email pattern should compile")
});

static PHONE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // International: +256 700 123 456, +44-207-123-4567
        Regex::new(r"\+\d{1,3}[ .-]?\d{3}[ .-]?\d{3}[ .-]?\d{3,4}").unwrap(),
        // US/Canada: (555) 123-4567, 555.123.4567
        Regex::new(r"\(?\d{3}\)?[ .-]?\d{3}[ .-]?\d{4}").unwrap(),
        // 4-3-3 grouping: 0772 123 456
        Regex::new(r"\d{4}[ .-]?\d{3}[ .-]?\d{3}").unwrap(),
    ]
});

pub fn extract_contact(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    if let Some(email) = EMAIL.find(text) {
        return Some(email.as_str().to_string());
    }

    PHONE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_wins_over_phone() {
        let text = "Call +256 700 123 456 or write to jane@example.com";
        assert_eq!(extract_contact(text).as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_international_phone() {
        let text = "Tel: +256 700 123 456";
        assert_eq!(extract_contact(text).as_deref(), Some("+256 700 123 456"));
    }

    #[test]
    fn test_us_phone() {
        let text = "Phone (555) 123-4567 after 5pm";
        assert_eq!(extract_contact(text).as_deref(), Some("(555) 123-4567"));
    }

    #[test]
    fn test_four_three_three_phone() {
        let text = "Mobile 0772 123 456";
        assert_eq!(extract_contact(text).as_deref(), Some("0772 123 456"));
    }

    #[test]
    fn test_no_contact() {
        assert_eq!(extract_contact("Nothing to reach here."), None);
        assert_eq!(extract_contact(""), None);
    }
}
