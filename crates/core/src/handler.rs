//! Maps user actions to the next fetch or render step.
//!
//! The handler is pure: it reads the current browse state and returns a
//! [`Command`]. Whoever executes the command feeds the fetched envelope back
//! through [`BrowseState::apply_envelope`].

use serde::Serialize;

use crate::catalog::{CatalogRecord, ResponseEnvelope};
use crate::endpoint::CatalogEndpoint;
use crate::navigation::{Direction, NavigationState, derive_navigation};
use crate::projection::{FactLink, PreviewCard, RecordProjection, project_preview, project_record};
use crate::query::{FilterSelection, build_search, initial_objects_url};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Fetch the unfiltered listing.
    LoadInitial,
    Submit(FilterSelection),
    Page(Direction),
    /// Open the detail view of a displayed record by index.
    OpenRecord(usize),
    FollowFact(FactLink),
}

/// A fetch to perform. `label` replaces the query label once the response is
/// applied; `None` leaves the label as it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchPlan {
    pub url: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fetch(FetchPlan),
    ShowDetail(Box<RecordProjection>),
    /// Nothing to do: disabled control or stale index.
    Ignore,
}

/// What is currently on screen.
#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    records: Vec<CatalogRecord>,
    navigation: NavigationState,
    query_label: String,
    total_records: Option<u64>,
}

impl BrowseState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    #[must_use]
    pub fn previews(&self) -> Vec<PreviewCard> {
        self.records.iter().map(project_preview).collect()
    }

    #[must_use]
    pub const fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    #[must_use]
    pub fn query_label(&self) -> &str {
        &self.query_label
    }

    #[must_use]
    pub const fn total_records(&self) -> Option<u64> {
        self.total_records
    }

    /// Decide what an action should do given the current state.
    #[must_use]
    pub fn handle(&self, endpoint: &CatalogEndpoint, action: &UserAction) -> Command {
        match action {
            UserAction::LoadInitial => {
                Command::Fetch(FetchPlan { url: initial_objects_url(endpoint), label: None })
            },
            UserAction::Submit(selection) => {
                let request = build_search(endpoint, selection);
                Command::Fetch(FetchPlan { url: request.url, label: Some(request.label) })
            },
            UserAction::Page(direction) => match self.navigation.url(*direction) {
                Some(url) => Command::Fetch(FetchPlan { url: url.to_owned(), label: None }),
                None => Command::Ignore,
            },
            UserAction::OpenRecord(index) => match self.records.get(*index) {
                Some(record) => Command::ShowDetail(Box::new(project_record(endpoint, record))),
                None => Command::Ignore,
            },
            UserAction::FollowFact(link) => {
                Command::Fetch(FetchPlan { url: link.url.clone(), label: Some(link.label()) })
            },
        }
    }

    /// Replace the displayed records and navigation with a fresh response.
    pub fn apply_envelope(&mut self, plan: &FetchPlan, envelope: ResponseEnvelope) {
        self.navigation = derive_navigation(&envelope);
        self.total_records = envelope.info.totalrecords;
        self.records = envelope.records;
        if let Some(label) = &plan.label {
            self.query_label.clone_from(label);
        }
    }
}
