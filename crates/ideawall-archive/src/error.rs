//! Error types for archive retrieval.

use thiserror::Error;

/// Errors recognized by the retrieval pipeline.
///
/// None of these unwind past the pipeline boundary: `fetch_all` converts
/// every failure into an empty result plus [`crate::FetchOutcome::error`].
/// Per-entry screening rejects are not errors and are dropped silently.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The store answered with a non-success HTTP status.
    #[error("Failed to fetch conversations")]
    FetchFailed {
        /// Status code reported by the store.
        status: u16,
    },
    /// The response body was not a parseable JSON document.
    #[error("Invalid response from server")]
    MalformedResponse(#[source] serde_json::Error),
    /// The request failed below the HTTP layer (DNS, refused connection).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
