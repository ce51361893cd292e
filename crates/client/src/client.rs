use std::sync::Arc;
use std::time::Duration;

use artsearch_core::{
    CatalogEndpoint, ReferenceEnvelope, ReferenceKind, ReferenceList, ResponseEnvelope,
};
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::observer::{FetchGuard, FetchObserver, NoopObserver};

/// Longest body excerpt carried in error messages.
const ERROR_BODY_EXCERPT: usize = 200;

/// Client for the remote catalog API.
pub struct CatalogClient {
    client: reqwest::Client,
    endpoint: CatalogEndpoint,
    observer: Arc<dyn FetchObserver>,
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("client", &self.client)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl CatalogClient {
    /// Creates a client for `endpoint` with a per-request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(endpoint: CatalogEndpoint, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::ClientInit(e.to_string()))?;
        Ok(Self { client, endpoint, observer: Arc::new(NoopObserver) })
    }

    /// Sets the observer notified around every request.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    #[must_use]
    pub const fn endpoint(&self) -> &CatalogEndpoint {
        &self.endpoint
    }

    /// Fetch a paged object listing from `url`, used verbatim.
    ///
    /// # Errors
    /// Returns an error if the request fails, the service answers with a
    /// non-success status, or the body is not a valid envelope.
    pub async fn fetch_envelope(&self, url: &str) -> Result<ResponseEnvelope, ClientError> {
        self.get_json(url, "object listing").await
    }

    /// Fetch one reference list straight from the remote service.
    ///
    /// # Errors
    /// Same failure modes as [`Self::fetch_envelope`].
    pub async fn fetch_reference_list(
        &self,
        kind: ReferenceKind,
    ) -> Result<ReferenceList, ClientError> {
        let url = kind.url(&self.endpoint);
        let envelope: ReferenceEnvelope = self.get_json(&url, kind.store_key()).await?;
        Ok(envelope.records)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        context: &str,
    ) -> Result<T, ClientError> {
        let _guard = FetchGuard::start(self.observer.as_ref(), url);
        tracing::debug!(context, "fetching catalog resource");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::HttpStatus {
                code: status.as_u16(),
                body: truncate(&body, ERROR_BODY_EXCERPT).to_owned(),
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::JsonParse {
            context: format!("{context} response (body: {})", truncate(&body, ERROR_BODY_EXCERPT)),
            source: e,
        })
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
