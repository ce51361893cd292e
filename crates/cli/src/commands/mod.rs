pub(crate) mod browse;
pub(crate) mod lists;
pub(crate) mod search;

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use artsearch_client::{CatalogClient, FetchObserver};
use artsearch_core::Settings;

/// Prints a loading notice on stderr while a request is in flight.
pub(crate) struct LoadingIndicator;

impl FetchObserver for LoadingIndicator {
    fn on_fetch_start(&self, _url: &str) {
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "Loading...");
        let _ = stderr.flush();
    }

    fn on_fetch_end(&self, _url: &str) {
        let _ = write!(std::io::stderr(), "\r\x1b[K");
    }
}

pub(crate) fn build_client(settings: &Settings, interactive: bool) -> Result<CatalogClient> {
    let endpoint = settings.endpoint()?;
    let client = CatalogClient::new(endpoint, Duration::from_secs(settings.timeout_secs))?;
    Ok(if interactive { client.with_observer(Arc::new(LoadingIndicator)) } else { client })
}
