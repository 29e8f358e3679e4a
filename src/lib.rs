//! letterdesk - letter intake for correspondence tracking.
//!
//! Recognizes scanned letters, extracts best-effort metadata (date, title,
//! sender, recipient, contact, urgency) and merges it into an editable draft.

// Model types use `from_str` methods that return Option<Self>,
// not Result<Self, Error> as std::str::FromStr requires.
#![allow(clippy::should_implement_trait)]

pub mod config;
pub mod extraction;
pub mod models;
pub mod ocr;
pub mod services;
