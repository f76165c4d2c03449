//! Error types for catalog loading.

use thiserror::Error;

/// Errors returned while loading or validating the parts catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalog file failed.
    #[error("failed to read catalog: {0}")]
    ReadFailed(#[from] std::io::Error),
    /// Parsing the catalog file failed.
    #[error("failed to parse catalog: {0}")]
    ParseFailed(#[from] json5::Error),
    /// Converting JSON values failed.
    #[error("failed to decode catalog: {0}")]
    DecodeFailed(#[from] serde_json::Error),
    /// A part entry failed validation.
    #[error("invalid part {id}: {message}")]
    InvalidPart { id: String, message: String },
}
