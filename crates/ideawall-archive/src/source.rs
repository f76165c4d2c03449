//! Transport seam for the archive document.

use crate::error::ArchiveError;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;

/// Path of the whole-store document under the base URL.
const DOCUMENT_PATH: &str = "data.json";

/// Source of the raw archive document.
///
/// Implementations own transport and HTTP status handling and hand the
/// pipeline the body text. `Ok(None)` means the store holds no document
/// yet (empty or whitespace body), which is an absence-of-data condition
/// rather than an error.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the entire key-value document as text.
    async fn fetch_document(&self) -> Result<Option<String>, ArchiveError>;
}

/// Record source reading the document over HTTP.
///
/// No retry, no caching, no authentication, and no timeout beyond the
/// transport default; every call is a fresh round trip for the whole
/// document.
#[derive(Debug, Clone)]
pub struct RestSource {
    http: Client,
    base_url: String,
}

impl RestSource {
    /// Create a source for the given store base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// URL of the whole-store document.
    fn document_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), DOCUMENT_PATH)
    }
}

#[async_trait]
impl RecordSource for RestSource {
    async fn fetch_document(&self) -> Result<Option<String>, ArchiveError> {
        let url = self.document_url();
        debug!("fetching archive document (url={url})");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ArchiveError::FetchFailed {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        if body.trim().is_empty() {
            info!("store returned an empty document");
            return Ok(None);
        }
        Ok(Some(body))
    }
}

#[cfg(test)]
mod tests {
    use super::RestSource;
    use pretty_assertions::assert_eq;

    #[test]
    fn document_url_joins_without_duplicate_slash() {
        let source = RestSource::new("https://store.example/");
        assert_eq!(source.document_url(), "https://store.example/data.json");
        let source = RestSource::new("https://store.example");
        assert_eq!(source.document_url(), "https://store.example/data.json");
    }
}
