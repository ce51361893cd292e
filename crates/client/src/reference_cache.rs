//! Reference lists served from a persistent store, fetched once on first use.

use std::collections::HashMap;
use std::sync::Mutex;

use artsearch_core::{KeyValueStore, ReferenceKind, ReferenceList};
use serde::Serialize;

use crate::client::CatalogClient;
use crate::error::ClientError;

/// Outcome of [`ReferenceCache::init`]. A kind whose fetch failed is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReferenceLists {
    pub classifications: Option<ReferenceList>,
    pub centuries: Option<ReferenceList>,
}

impl ReferenceLists {
    #[must_use]
    pub const fn get(&self, kind: ReferenceKind) -> Option<&ReferenceList> {
        match kind {
            ReferenceKind::Classifications => self.classifications.as_ref(),
            ReferenceKind::Centuries => self.centuries.as_ref(),
        }
    }
}

/// Cache of the classification and century lists.
///
/// Once a list is loaded it is never refetched or invalidated for the life of
/// the cache, even if persisting it failed.
pub struct ReferenceCache<'a, S> {
    client: &'a CatalogClient,
    store: S,
    loaded: Mutex<HashMap<ReferenceKind, ReferenceList>>,
}

impl<'a, S: KeyValueStore> ReferenceCache<'a, S> {
    pub fn new(client: &'a CatalogClient, store: S) -> Self {
        Self { client, store, loaded: Mutex::new(HashMap::new()) }
    }

    /// Load both lists concurrently. Either may fail without affecting the
    /// other; failures are logged.
    pub async fn init(&self) -> ReferenceLists {
        let (classifications, centuries) = tokio::join!(
            self.get(ReferenceKind::Classifications),
            self.get(ReferenceKind::Centuries)
        );
        ReferenceLists {
            classifications: settle(ReferenceKind::Classifications, classifications),
            centuries: settle(ReferenceKind::Centuries, centuries),
        }
    }

    /// Return the list for `kind`: from memory if already loaded, else from
    /// the store, else fetched from the remote service and persisted.
    ///
    /// # Errors
    /// Returns an error if the list is not loaded or stored and the remote
    /// fetch fails.
    pub async fn get(&self, kind: ReferenceKind) -> Result<ReferenceList, ClientError> {
        if let Some(list) = self.remembered(kind) {
            return Ok(list);
        }

        if let Some(list) = self.load(kind) {
            tracing::debug!(%kind, entries = list.len(), "reference list served from store");
            return Ok(self.remember(kind, list));
        }

        let list = self.client.fetch_reference_list(kind).await?;
        tracing::info!(%kind, entries = list.len(), "fetched reference list");
        if let Err(e) = self.persist(kind, &list) {
            tracing::warn!(%kind, error = %e, "failed to persist reference list");
        }
        Ok(self.remember(kind, list))
    }

    fn remembered(&self, kind: ReferenceKind) -> Option<ReferenceList> {
        let loaded = self.loaded.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        loaded.get(&kind).cloned()
    }

    /// Keep the first list loaded for `kind`; later loads yield that one.
    fn remember(&self, kind: ReferenceKind, list: ReferenceList) -> ReferenceList {
        let mut loaded = self.loaded.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        loaded.entry(kind).or_insert(list).clone()
    }

    fn load(&self, kind: ReferenceKind) -> Option<ReferenceList> {
        let raw = match self.store.get(kind.store_key()) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(%kind, error = %e, "failed to read stored reference list");
                return None;
            },
        };
        match serde_json::from_str(&raw) {
            Ok(list) => Some(list),
            Err(e) => {
                tracing::warn!(%kind, error = %e, "stored reference list is corrupt, refetching");
                None
            },
        }
    }

    fn persist(&self, kind: ReferenceKind, list: &ReferenceList) -> Result<(), ClientError> {
        let raw = serde_json::to_string(list).map_err(artsearch_core::CatalogError::from)?;
        self.store.put(kind.store_key(), &raw)?;
        Ok(())
    }
}

fn settle(kind: ReferenceKind, result: Result<ReferenceList, ClientError>) -> Option<ReferenceList> {
    match result {
        Ok(list) => Some(list),
        Err(e) => {
            tracing::error!(%kind, error = %e, "failed to load reference list");
            None
        },
    }
}
