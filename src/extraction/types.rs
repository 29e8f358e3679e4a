//! Types produced by field extraction.

use serde::{Deserialize, Serialize};

use crate::models::Urgency;

/// Best-effort annotation of one recognized page.
///
/// Every field except `urgency` is independently optional. Callers must treat
/// any of them as possibly missing and allow manual correction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Calendar date normalized to `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    /// Email address or phone number, email first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default)]
    pub urgency: Urgency,
}

impl ExtractionResult {
    /// True when no field carries a signal.
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.title.is_none()
            && self.sender.is_none()
            && self.recipient.is_none()
            && self.contact.is_none()
            && self.urgency == Urgency::Low
    }

    /// Number of optional fields that were found.
    pub fn found_count(&self) -> usize {
        [
            &self.date,
            &self.title,
            &self.sender,
            &self.recipient,
            &self.contact,
        ]
        .iter()
        .filter(|f| f.is_some())
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let result = ExtractionResult::default();
        assert!(result.is_empty());
        assert_eq!(result.found_count(), 0);
        assert_eq!(result.urgency, Urgency::Low);
    }

    #[test]
    fn test_json_skips_absent_fields() {
        let result = ExtractionResult {
            title: Some("Budget".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"title":"Budget","urgency":"low"}"#);
    }
}
