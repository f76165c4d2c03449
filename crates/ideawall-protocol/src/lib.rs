//! Wire/data model for ideawall conversation records.
//!
//! This crate owns the stored payload shape, the materialized record type,
//! shallow candidate screening, and push-key timestamp decoding.

mod push_key;
mod record;
mod screen;

/// Push-key timestamp decoding.
pub use push_key::decode_push_key;
/// Record models.
pub use record::{ConversationRecord, DialogueTurn, RawRecordKey, StoredConversation};
/// Candidate screening.
pub use screen::{Screening, is_valid_candidate, screen_candidate};
