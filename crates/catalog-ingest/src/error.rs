//! Error types for catalog ingestion.

use thiserror::Error;

/// Failures while obtaining the raw item collection.
///
/// All of these surface to the presentation layer as one generic
/// retrieval failure; there is no retry and no partial-result handling.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid source url: {0}")]
    Url(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected http status: {0}")]
    Status(reqwest::StatusCode),
    #[error("payload decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
