//! Shallow screening of raw record candidates.
//!
//! Screening checks required-field presence and container shape only; it
//! never inspects element shape (dialogue turns and key phrases pass
//! through unexamined). Rejects are silent by contract.

use crate::record::StoredConversation;
use log::debug;
use serde_json::Value;

/// Outcome of screening one raw store entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Screening {
    /// Candidate passed the shallow checks and deserialized.
    Accepted(StoredConversation),
    /// Candidate is dropped from the result.
    Rejected,
}

/// Shallow validity predicate over an untyped store entry.
///
/// True iff the candidate is an object with a truthy `image_url`, a
/// non-empty `key_phrases` array, a truthy `summary`, and a non-empty
/// `conversation` array. Pure; never fails.
pub fn is_valid_candidate(candidate: &Value) -> bool {
    let Value::Object(fields) = candidate else {
        return false;
    };
    is_truthy(fields.get("image_url"))
        && is_nonempty_array(fields.get("key_phrases"))
        && is_truthy(fields.get("summary"))
        && is_nonempty_array(fields.get("conversation"))
}

/// Screen a raw candidate into a typed stored payload.
pub fn screen_candidate(candidate: &Value) -> Screening {
    if !is_valid_candidate(candidate) {
        return Screening::Rejected;
    }
    match serde_json::from_value::<StoredConversation>(candidate.clone()) {
        Ok(stored) => Screening::Accepted(stored),
        Err(err) => {
            debug!("screened candidate failed typed decode: {err}");
            Screening::Rejected
        }
    }
}

/// Truthiness for untyped payload fields: present and not null, false,
/// zero, or the empty string.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// True when the field is an array with at least one element.
fn is_nonempty_array(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Array(items)) if !items.is_empty())
}
