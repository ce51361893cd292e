//! Typed error enum for the client crate.

use artsearch_core::CatalogError;
use thiserror::Error;

/// Errors from catalog API operations.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("store error: {0}")]
    Store(#[from] CatalogError),
}

impl ClientError {
    /// Whether the failure happened talking to the remote service (request
    /// rejected or response undecodable).
    #[must_use]
    pub const fn is_network_failure(&self) -> bool {
        matches!(self, Self::HttpRequest(_) | Self::HttpStatus { .. } | Self::JsonParse { .. })
    }
}
