// src/api/error.rs
use thiserror::Error;

/// Why a single fetch against the brewery API failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    // Worker panicked or never started
    #[error("fetch worker exited before producing a result")]
    Interrupted,
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::HttpStatus { .. } => "http-status",
            FetchError::Decode(_) => "decode",
            FetchError::Interrupted => "interrupted",
        }
    }
}
