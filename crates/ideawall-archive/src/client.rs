//! Retrieval pipeline entry points and view selectors.

use crate::error::ArchiveError;
use crate::normalize::materialize_document;
use crate::source::{RecordSource, RestSource};
use ideawall_protocol::ConversationRecord;
use log::{info, warn};
use std::sync::Arc;

/// Default page size for [`ArchiveClient::previous`].
pub const DEFAULT_PREVIOUS_LIMIT: usize = 6;

/// Result of one retrieval call.
///
/// Failures never unwind out of the pipeline: a failed call carries empty
/// `records` plus the error that caused it, ready for an outer layer to
/// project into a banner. An empty store also yields empty `records`, but
/// with no error; zero valid records and an empty store are
/// indistinguishable by contract.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Materialized records, newest first.
    pub records: Vec<ConversationRecord>,
    /// Error recorded for this call, if any.
    pub error: Option<ArchiveError>,
}

/// Client producing ordered views over the conversation archive.
///
/// Every operation performs a fresh fetch of the whole document; there is
/// no caching and concurrent calls are independent.
#[derive(Clone)]
pub struct ArchiveClient {
    source: Arc<dyn RecordSource>,
}

impl ArchiveClient {
    /// Client reading from the store's REST endpoint.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_source(Arc::new(RestSource::new(base_url)))
    }

    /// Client reading from a custom record source.
    pub fn with_source(source: Arc<dyn RecordSource>) -> Self {
        Self { source }
    }

    /// Fetch, screen, and order every record in the store.
    pub async fn fetch_all(&self) -> FetchOutcome {
        match self.try_fetch_all().await {
            Ok(records) => FetchOutcome {
                records,
                error: None,
            },
            Err(error) => {
                warn!("archive fetch failed: {error}");
                FetchOutcome {
                    records: Vec::new(),
                    error: Some(error),
                }
            }
        }
    }

    /// The most recent record, or `None` when the archive is empty or the
    /// fetch degraded.
    pub async fn latest(&self) -> Option<ConversationRecord> {
        self.fetch_all().await.records.into_iter().next()
    }

    /// Up to `limit` records older than the latest one.
    ///
    /// Skips the newest record and returns the contiguous slice after it;
    /// a `limit` of zero yields an empty page.
    pub async fn previous(&self, limit: usize) -> Vec<ConversationRecord> {
        self.fetch_all()
            .await
            .records
            .into_iter()
            .skip(1)
            .take(limit)
            .collect()
    }

    async fn try_fetch_all(&self) -> Result<Vec<ConversationRecord>, ArchiveError> {
        let Some(text) = self.source.fetch_document().await? else {
            return Ok(Vec::new());
        };
        let mut records = materialize_document(&text)?;
        // Ties keep whatever relative order the sort produces.
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        info!("fetched archive records (count={})", records.len());
        Ok(records)
    }
}
