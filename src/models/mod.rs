//! Data models for letter intake.

mod letter;
mod urgency;

pub use letter::{
    is_valid_email, search_letters, DraftError, LetterDraft, LetterStatus, DEFAULT_CATEGORY,
};
pub use urgency::Urgency;
