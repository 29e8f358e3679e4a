//! Field extraction from recognized letter text.
//!
//! Provides a `FieldExtractor` trait for pluggable extraction backends and the
//! built-in `PatternFieldExtractor`, which runs ordered pattern lists over the
//! text and keeps the first match per field.
//!
//! Extraction never fails. A field that yields no signal is simply absent, and
//! urgency falls back to `low`. The result is meant to pre-fill an editable
//! form, not to be trusted as a complete parse.

mod contact;
mod date;
mod parties;
mod title;
mod types;
mod urgency;

pub use contact::extract_contact;
pub use date::{extract_date, DateOrder};
pub use parties::{extract_recipient, extract_sender};
pub use title::extract_title;
pub use types::ExtractionResult;
pub use urgency::{determine_urgency, urgency_score};

/// Trait for pluggable field extraction backends.
pub trait FieldExtractor: Send + Sync {
    /// Human-readable backend identifier (e.g. "pattern").
    fn backend_id(&self) -> &str;

    /// Extract letter fields from one page of recognized text.
    fn extract(&self, text: &str) -> ExtractionResult;

    /// Extract from input that may be missing altogether.
    fn extract_optional(&self, text: Option<&str>) -> ExtractionResult {
        match text {
            Some(text) => self.extract(text),
            None => ExtractionResult::default(),
        }
    }
}

/// Ordered-pattern extractor.
///
/// Pattern order is precedence: the first pattern that matches wins and later
/// ones are never consulted, so reordering changes results.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternFieldExtractor {
    date_order: DateOrder,
}

impl PatternFieldExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date_order(date_order: DateOrder) -> Self {
        Self { date_order }
    }

    pub fn date_order(&self) -> DateOrder {
        self.date_order
    }
}

impl FieldExtractor for PatternFieldExtractor {
    fn backend_id(&self) -> &str {
        "pattern"
    }

    fn extract(&self, text: &str) -> ExtractionResult {
        if text.trim().is_empty() {
            tracing::debug!("empty text, nothing to extract");
            return ExtractionResult::default();
        }

        let result = ExtractionResult {
            date: extract_date(text, self.date_order),
            title: extract_title(text),
            sender: extract_sender(text),
            recipient: extract_recipient(text),
            contact: extract_contact(text),
            urgency: determine_urgency(text),
        };

        tracing::debug!(
            found = result.found_count(),
            urgency = %result.urgency,
            "extracted letter fields"
        );
        result
    }
}

/// Convenience function: extracts with the default `PatternFieldExtractor`.
pub fn extract_fields(text: &str) -> ExtractionResult {
    PatternFieldExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Urgency;

    const LETTER: &str = "\
MINISTRY OF WATER AND ENVIRONMENT
Date: 12/08/2025
To: The Commissioner, Water Resources
Subject: Request for Borehole Rehabilitation

Dear Sir,

The borehole serving Kawempe has failed. This is urgent and a priority
for the community. Contact us at water.office@example.org or +256 700 123 456.

Yours faithfully, Jane Achieng
Commissioner's Office
";

    #[test]
    fn test_full_letter() {
        let result = extract_fields(LETTER);
        assert_eq!(result.date.as_deref(), Some("2025-08-12"));
        assert_eq!(
            result.title.as_deref(),
            Some("Request for Borehole Rehabilitation")
        );
        assert_eq!(result.sender.as_deref(), Some("Jane Achieng"));
        assert_eq!(
            result.recipient.as_deref(),
            Some("The Commissioner, Water Resources")
        );
        assert_eq!(result.contact.as_deref(), Some("water.office@example.org"));
        assert_eq!(result.urgency, Urgency::Urgent);
    }

    #[test]
    fn test_missing_input_degrades_to_defaults() {
        let extractor = PatternFieldExtractor::new();
        assert_eq!(extractor.extract_optional(None), ExtractionResult::default());
        assert_eq!(extractor.extract(""), ExtractionResult::default());
        assert_eq!(extractor.extract("  \n \t"), ExtractionResult::default());
    }

    #[test]
    fn test_idempotent() {
        let first = extract_fields(LETTER);
        let second = extract_fields(LETTER);
        assert_eq!(first, second);
    }

    #[test]
    fn test_date_order_is_applied() {
        let extractor = PatternFieldExtractor::with_date_order(DateOrder::MonthFirst);
        assert_eq!(extractor.date_order(), DateOrder::MonthFirst);
        let result = extractor.extract("Meeting on 12/08/2025 regarding budget");
        assert_eq!(result.date.as_deref(), Some("2025-12-08"));
    }

    #[test]
    fn test_backend_id() {
        assert_eq!(PatternFieldExtractor::new().backend_id(), "pattern");
    }

    #[test]
    fn test_backend_trait_matches_convenience() {
        let via_trait: Box<dyn FieldExtractor> = Box::new(PatternFieldExtractor::new());
        assert_eq!(via_trait.extract(LETTER), extract_fields(LETTER));
    }
}
