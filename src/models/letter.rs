//! Letter intake models.
//!
//! A `LetterDraft` holds the editable values of the intake form before the
//! letter is submitted. Extraction results are merged into it field by field,
//! and the user corrects whatever is left.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extraction::ExtractionResult;

use super::Urgency;

pub const DEFAULT_CATEGORY: &str = "general";

// Deliberately loose: something@something.something, no whitespace.
static EMAIL_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Whether `value` looks like a single email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_ADDRESS.is_match(value)
}

/// Lifecycle status of a letter record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterStatus {
    #[default]
    Received,
    InProgress,
    Sent,
    Archived,
}

impl LetterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::InProgress => "in_progress",
            Self::Sent => "sent",
            Self::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "received" => Some(Self::Received),
            "in_progress" => Some(Self::InProgress),
            "sent" => Some(Self::Sent),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }
}

/// Validation errors for a draft about to be submitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address in {field}: {value:?}")]
    InvalidEmail { field: &'static str, value: String },
}

/// Editable intake form values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterDraft {
    pub title: String,
    pub sender_name: String,
    pub sender_address: String,
    pub sender_email: String,
    pub sender_phone: String,
    pub recipient: String,
    /// Where a copy of the letter is emailed once it is filed.
    pub receiver_email: String,
    pub content: String,
    pub priority: Urgency,
    pub category: String,
    pub date_received: NaiveDate,
    /// Whether any value came from a recognized document.
    pub extracted_from_image: bool,
    pub status: LetterStatus,
}

impl Default for LetterDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            sender_name: String::new(),
            sender_address: String::new(),
            sender_email: String::new(),
            sender_phone: String::new(),
            recipient: String::new(),
            receiver_email: String::new(),
            content: String::new(),
            priority: Urgency::Low,
            category: DEFAULT_CATEGORY.to_string(),
            date_received: Local::now().date_naive(),
            extracted_from_image: false,
            status: LetterStatus::Received,
        }
    }
}

impl LetterDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store recognized text as the letter body.
    pub fn with_content(mut self, text: &str) -> Self {
        self.content = text.trim().to_string();
        self
    }

    /// Merge an extraction result into the draft.
    ///
    /// Only fields the result carries are written; everything else keeps its
    /// current value. A `low` urgency is the extractor's default and never
    /// downgrades a priority the user already chose.
    pub fn apply_extraction(&mut self, result: &ExtractionResult) {
        if let Some(ref title) = result.title {
            self.title = title.clone();
        }
        if let Some(ref sender) = result.sender {
            self.sender_name = sender.clone();
        }
        if let Some(ref recipient) = result.recipient {
            self.recipient = recipient.clone();
        }
        if let Some(date) = result
            .date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        {
            self.date_received = date;
        }
        if let Some(ref contact) = result.contact {
            if contact.contains('@') {
                self.sender_email = contact.clone();
            } else {
                self.sender_phone = contact.clone();
            }
        }
        if result.urgency > Urgency::Low {
            self.priority = result.urgency;
        }
    }

    /// Check the fields required before a letter can be submitted.
    ///
    /// Email fields are optional, but a filled-in one must look like an
    /// address.
    pub fn validate(&self) -> Result<(), DraftError> {
        let required = [
            ("title", &self.title),
            ("sender_name", &self.sender_name),
            ("content", &self.content),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField(name));
            }
        }

        let emails = [
            ("sender_email", &self.sender_email),
            ("receiver_email", &self.receiver_email),
        ];
        for (field, value) in emails {
            let value = value.trim();
            if !value.is_empty() && !is_valid_email(value) {
                return Err(DraftError::InvalidEmail {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Case-insensitive substring match over title, content, sender and
    /// recipient. An empty term matches every letter.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        [&self.title, &self.content, &self.sender_name, &self.recipient]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

/// Letters matching `term`, in their original order.
pub fn search_letters<'a>(letters: &'a [LetterDraft], term: &str) -> Vec<&'a LetterDraft> {
    letters
        .iter()
        .filter(|letter| letter.matches_search(term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_draft() -> LetterDraft {
        LetterDraft {
            title: "Typed title".to_string(),
            sender_name: "Typed sender".to_string(),
            recipient: "Typed recipient".to_string(),
            priority: Urgency::High,
            date_received: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            ..LetterDraft::default()
        }
    }

    #[test]
    fn test_defaults() {
        let draft = LetterDraft::new();
        assert_eq!(draft.priority, Urgency::Low);
        assert_eq!(draft.category, "general");
        assert_eq!(draft.status, LetterStatus::Received);
        assert!(!draft.extracted_from_image);
    }

    #[test]
    fn test_absent_fields_leave_values_untouched() {
        let mut draft = seeded_draft();
        let before = draft.clone();
        draft.apply_extraction(&ExtractionResult::default());
        assert_eq!(draft, before);
    }

    #[test]
    fn test_present_fields_overwrite() {
        let mut draft = seeded_draft();
        draft.apply_extraction(&ExtractionResult {
            date: Some("2025-08-15".to_string()),
            title: Some("Annual Leave Application".to_string()),
            sender: None,
            recipient: Some("HR Manager".to_string()),
            contact: Some("+256 700 123 456".to_string()),
            urgency: Urgency::Urgent,
        });

        assert_eq!(draft.title, "Annual Leave Application");
        assert_eq!(draft.sender_name, "Typed sender");
        assert_eq!(draft.recipient, "HR Manager");
        assert_eq!(
            draft.date_received,
            NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
        );
        assert_eq!(draft.sender_phone, "+256 700 123 456");
        assert!(draft.sender_email.is_empty());
        assert_eq!(draft.priority, Urgency::Urgent);
    }

    #[test]
    fn test_email_contact_goes_to_email_field() {
        let mut draft = LetterDraft::new();
        draft.apply_extraction(&ExtractionResult {
            contact: Some("jane@example.com".to_string()),
            ..Default::default()
        });
        assert_eq!(draft.sender_email, "jane@example.com");
        assert!(draft.sender_phone.is_empty());
    }

    #[test]
    fn test_low_urgency_does_not_downgrade() {
        let mut draft = seeded_draft();
        draft.apply_extraction(&ExtractionResult {
            title: Some("Something".to_string()),
            ..Default::default()
        });
        assert_eq!(draft.priority, Urgency::High);
    }

    #[test]
    fn test_validate_names_first_missing_field() {
        let draft = LetterDraft::new();
        assert_eq!(draft.validate(), Err(DraftError::MissingField("title")));

        let draft = seeded_draft();
        assert_eq!(draft.validate(), Err(DraftError::MissingField("content")));

        let draft = seeded_draft().with_content("  Body text \n");
        assert_eq!(draft.content, "Body text");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed_emails() {
        let mut draft = seeded_draft().with_content("Body");
        draft.sender_email = "jane at example.com".to_string();
        assert_eq!(
            draft.validate(),
            Err(DraftError::InvalidEmail {
                field: "sender_email",
                value: "jane at example.com".to_string(),
            })
        );

        draft.sender_email = "jane@example.com".to_string();
        draft.receiver_email = "registry@ministry".to_string();
        assert!(matches!(
            draft.validate(),
            Err(DraftError::InvalidEmail { field: "receiver_email", .. })
        ));

        draft.receiver_email = "  ".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a.b@example.co.ug"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("two words@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_search_letters() {
        let budget = LetterDraft {
            title: "Q4 Budget Review".to_string(),
            sender_name: "Finance Office".to_string(),
            ..LetterDraft::default()
        };
        let leave = LetterDraft {
            title: "Annual leave".to_string(),
            recipient: "HR Manager".to_string(),
            content: "I request two weeks of leave.".to_string(),
            ..LetterDraft::default()
        };
        let letters = vec![budget.clone(), leave.clone()];

        assert_eq!(search_letters(&letters, "BUDGET"), vec![&budget]);
        assert_eq!(search_letters(&letters, "hr man"), vec![&leave]);
        assert_eq!(search_letters(&letters, "finance"), vec![&budget]);
        assert_eq!(search_letters(&letters, "two weeks"), vec![&leave]);
        assert!(search_letters(&letters, "tender").is_empty());
        assert_eq!(search_letters(&letters, "").len(), 2);
    }

    #[test]
    fn test_draft_json_fills_missing_fields() {
        let draft: LetterDraft =
            serde_json::from_str(r#"{"title": "Old draft", "priority": "high"}"#).unwrap();
        assert_eq!(draft.title, "Old draft");
        assert_eq!(draft.priority, Urgency::High);
        assert_eq!(draft.category, "general");
        assert!(draft.receiver_email.is_empty());
    }

    #[test]
    fn test_status_round_trip_names() {
        assert_eq!(LetterStatus::from_str("in_progress"), Some(LetterStatus::InProgress));
        assert_eq!(LetterStatus::Sent.as_str(), "sent");
        assert_eq!(LetterStatus::from_str("lost"), None);
    }
}
