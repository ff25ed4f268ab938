//! Error types for the data services.
//!
//! Fetch failures are classified so callers can tell a transport problem
//! from a response that arrived but did not decode.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced on a data service's failure channel.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Endpoint string is not an absolute URL
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Request never produced a complete response
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Request to '{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Body is not a JSON array of posts
    #[error("Failed to decode posts from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Short machine-readable kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl { .. } => "invalid_url",
            FetchError::Transport { .. } => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Decode { .. } => "decode",
        }
    }

    /// True for failures that happened before a usable response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport { .. } | FetchError::Status { .. })
    }
}

/// Errors raised while building a service from configuration.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to read fixture file '{path}': {source}")]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse fixture file '{path}': {source}")]
    FixtureParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
