//! Keyword-weighted urgency.
//!
//! Each keyword tier contributes its weight once if any of its phrases occurs
//! anywhere in the lowercased text, and tier weights add up. This is a coarse
//! heuristic score, not a probability: "urgent" alone already reaches the top
//! level, and a stray "attention" in a footer bumps a letter to medium.

use crate::models::Urgency;

const KEYWORD_TIERS: &[(u32, &[&str])] = &[
    (3, &["urgent", "immediate", "asap", "emergency", "critical"]),
    (
        2,
        &["priority", "important", "attention required", "time sensitive"],
    ),
    (1, &["attention", "please review", "please respond"]),
];

/// Additive keyword score before it is mapped onto a level.
pub fn urgency_score(text: &str) -> u32 {
    let lowered = text.to_lowercase();
    KEYWORD_TIERS
        .iter()
        .filter(|(_, phrases)| phrases.iter().any(|p| lowered.contains(p)))
        .map(|(weight, _)| weight)
        .sum()
}

pub fn determine_urgency(text: &str) -> Urgency {
    if text.trim().is_empty() {
        return Urgency::Low;
    }
    Urgency::from_score(urgency_score(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_are_additive() {
        let text = "URGENT: priority handling requested";
        assert_eq!(urgency_score(text), 5);
        assert_eq!(determine_urgency(text), Urgency::Urgent);
    }

    #[test]
    fn test_tier_counts_once() {
        assert_eq!(urgency_score("urgent urgent emergency asap"), 3);
    }

    #[test]
    fn test_levels() {
        assert_eq!(determine_urgency("Please review the attached"), Urgency::Medium);
        assert_eq!(determine_urgency("This is important"), Urgency::High);
        assert_eq!(determine_urgency("Routine monthly update"), Urgency::Low);
        assert_eq!(determine_urgency(""), Urgency::Low);
    }

    #[test]
    fn test_attention_required_hits_two_tiers() {
        // "attention required" also contains "attention".
        assert_eq!(urgency_score("attention required"), 3);
    }
}
