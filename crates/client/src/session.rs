//! Executes handler commands against the remote catalog.

use artsearch_core::{BrowseState, Command, FetchPlan, RecordProjection, UserAction};

use crate::client::CatalogClient;

/// What a dispatched action changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Displayed records, navigation (and possibly the label) were replaced.
    Updated,
    Detail(Box<RecordProjection>),
    /// The action had nothing to do.
    Unchanged,
    /// The fetch failed and was logged; displayed state is untouched.
    FetchFailed,
}

/// A browsing session: one client plus what is currently displayed.
#[derive(Debug)]
pub struct Session {
    client: CatalogClient,
    state: BrowseState,
}

impl Session {
    #[must_use]
    pub fn new(client: CatalogClient) -> Self {
        Self { client, state: BrowseState::new() }
    }

    #[must_use]
    pub const fn state(&self) -> &BrowseState {
        &self.state
    }

    #[must_use]
    pub const fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// Run one user action to completion. Network failures never escape.
    pub async fn dispatch(&mut self, action: &UserAction) -> Outcome {
        match self.state.handle(self.client.endpoint(), action) {
            Command::Ignore => Outcome::Unchanged,
            Command::ShowDetail(projection) => Outcome::Detail(projection),
            Command::Fetch(plan) => self.fetch(&plan).await,
        }
    }

    /// Fetch an arbitrary listing URL verbatim, e.g. a stored page cursor.
    pub async fn open_url(&mut self, url: &str) -> Outcome {
        let plan = FetchPlan { url: url.to_owned(), label: None };
        self.fetch(&plan).await
    }

    async fn fetch(&mut self, plan: &FetchPlan) -> Outcome {
        match self.client.fetch_envelope(&plan.url).await {
            Ok(envelope) => {
                tracing::debug!(records = envelope.records.len(), "applying response");
                self.state.apply_envelope(plan, envelope);
                Outcome::Updated
            },
            Err(e) => {
                tracing::error!(error = %e, "catalog request failed");
                Outcome::FetchFailed
            },
        }
    }
}
