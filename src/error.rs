use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a scan. None of these are retried.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to encode search request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("received non-success response status from {url}: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode search response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to read keywords from {path}: {source}")]
    Keywords {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;
