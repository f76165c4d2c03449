//! Retrieval and normalization pipeline for the conversation archive.
//!
//! Pulls the store's key-value document, screens each entry, resolves a
//! creation timestamp per record, and produces ordered views (latest
//! record, pages of older records). Read-only: nothing here mutates the
//! store.

mod client;
mod error;
mod normalize;
mod source;

/// Archive client and per-call fetch outcome.
pub use client::{ArchiveClient, DEFAULT_PREVIOUS_LIMIT, FetchOutcome};
/// Pipeline error taxonomy.
pub use error::ArchiveError;
/// Transport seam and REST implementation.
pub use source::{RecordSource, RestSource};
