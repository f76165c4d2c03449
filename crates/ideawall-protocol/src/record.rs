//! Record models for the conversation archive.

use serde::{Deserialize, Serialize};

/// Store-assigned key a record was written under.
///
/// Lexicographically sortable and unique within the store; the leading
/// characters encode a creation timestamp (see [`crate::decode_push_key`]).
/// Otherwise opaque.
pub type RawRecordKey = String;

/// A single turn in a generated conversation.
///
/// Fields default to empty strings on deserialization: turn shape is
/// deliberately not validated, and a malformed turn must not reject the
/// surrounding record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueTurn {
    /// Speaker role, e.g. "user" or "assistant".
    #[serde(default)]
    pub role: String,
    /// Turn text.
    #[serde(default)]
    pub content: String,
}

/// Conversation payload exactly as stored in the remote document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConversation {
    /// Dialogue turns in chronological order.
    pub conversation: Vec<DialogueTurn>,
    /// URL of the generated sketch image.
    pub image_url: String,
    /// Key phrases extracted from the conversation.
    pub key_phrases: Vec<String>,
    /// One-line summary of the idea.
    pub summary: String,
    /// Stored creation time in epoch milliseconds, when the writer set one.
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// A materialized archive record.
///
/// Produced by the retrieval pipeline after screening and timestamp
/// resolution; the timestamp is always present and `source_key` is unique
/// within one retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    /// Dialogue turns in chronological order.
    pub conversation: Vec<DialogueTurn>,
    /// URL of the generated sketch image.
    pub image_url: String,
    /// Key phrases extracted from the conversation.
    pub key_phrases: Vec<String>,
    /// One-line summary of the idea.
    pub summary: String,
    /// Resolved creation time in epoch milliseconds.
    pub timestamp: i64,
    /// Key this record was stored under.
    pub source_key: RawRecordKey,
}

impl StoredConversation {
    /// Materialize the payload with a resolved timestamp and source key.
    pub fn materialize(self, timestamp: i64, source_key: RawRecordKey) -> ConversationRecord {
        ConversationRecord {
            conversation: self.conversation,
            image_url: self.image_url,
            key_phrases: self.key_phrases,
            summary: self.summary,
            timestamp,
            source_key,
        }
    }
}
