//! Document parsing, screening, and timestamp resolution.

use crate::error::ArchiveError;
use chrono::Utc;
use ideawall_protocol::{ConversationRecord, Screening, decode_push_key, screen_candidate};
use log::{debug, warn};
use serde_json::Value;

/// Parse the document text and materialize every valid entry.
///
/// The document is a single JSON object mapping store keys to untyped
/// candidates; a JSON `null` document means the store is empty. Screening
/// rejects are dropped silently. Iteration order is whatever the JSON map
/// yields; callers establish ordering with the timestamp sort.
pub(crate) fn materialize_document(text: &str) -> Result<Vec<ConversationRecord>, ArchiveError> {
    let document: Value = serde_json::from_str(text).map_err(ArchiveError::MalformedResponse)?;
    let entries = match document {
        Value::Null => return Ok(Vec::new()),
        Value::Object(entries) => entries,
        _ => {
            warn!("store document is not an object; treating as empty");
            return Ok(Vec::new());
        }
    };

    let total = entries.len();
    let mut records = Vec::new();
    for (key, candidate) in entries {
        match screen_candidate(&candidate) {
            Screening::Accepted(stored) => {
                let timestamp = resolve_timestamp(stored.timestamp, &key);
                records.push(stored.materialize(timestamp, key));
            }
            Screening::Rejected => {
                debug!("dropping invalid store entry (key={key})");
            }
        }
    }
    debug!(
        "materialized store entries (total={total}, kept={})",
        records.len()
    );
    Ok(records)
}

/// Resolve a record's creation time in epoch milliseconds.
///
/// Priority: the stored value when present (explicit presence, so a stored
/// epoch zero is honored), then the key-decoded timestamp when positive,
/// then capture time. Non-positive decodes only arise from malformed keys
/// and count as absent.
pub(crate) fn resolve_timestamp(stored: Option<i64>, key: &str) -> i64 {
    if let Some(stored) = stored {
        return stored;
    }
    let decoded = decode_push_key(key);
    if decoded > 0 {
        return decoded;
    }
    Utc::now().timestamp_millis()
}
