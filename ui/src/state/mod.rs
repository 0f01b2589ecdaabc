//! View State Management
//!
//! This module holds:
//! - `AppState`: the shared client handed to every view through context
//! - `ListState`: the per-view display state and its load phases
//! - `Diagnostics`: where failed loads are reported

use std::cell::RefCell;

use octofit_shared::{Resource, TableView};

use crate::client::{fetch_collection, ClientError, HttpClient, ResourceClient};
use crate::config;

/// Global application state
#[derive(Clone, Debug)]
pub struct AppState {
    pub client: HttpClient,
}

impl AppState {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Build the state from the browser's configured base URL
    pub fn from_environment() -> Self {
        Self::new(HttpClient::new(config::base_from_environment()))
    }
}

// ============================================================================
// Display state
// ============================================================================

/// Load phase of a view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Mounted, fetch in flight
    #[default]
    Loading,
    /// Fetch succeeded; the collection may still be empty
    Loaded,
    /// Fetch failed and was reported; the collection is untouched
    Errored,
}

/// Display state of one resource view
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<R> {
    phase: LoadPhase,
    records: Vec<R>,
}

impl<R: Resource> ListState<R> {
    /// Fresh state: loading, no records
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Loading,
            records: Vec::new(),
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Apply the outcome of a fetch
    ///
    /// Success replaces the collection wholesale. Failure leaves it as is and
    /// emits exactly one diagnostic entry.
    pub fn settle(&mut self, outcome: Result<Vec<R>, ClientError>, diagnostics: &dyn Diagnostics) {
        match outcome {
            Ok(records) => {
                tracing::debug!("Loaded {} {}", records.len(), R::KIND);
                self.records = records;
                self.phase = LoadPhase::Loaded;
            }
            Err(error) => {
                let message = format!("Error fetching {}:", R::KIND);
                diagnostics.report(&message, &error);
                self.phase = LoadPhase::Errored;
            }
        }
    }

    /// Table of the current records
    pub fn table(&self) -> TableView {
        TableView::from_records(&self.records)
    }
}

impl<R: Resource> Default for ListState<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the mount-time load of a view: one fetch, settled into fresh state
pub async fn mount<R, C>(client: &C, diagnostics: &dyn Diagnostics) -> ListState<R>
where
    R: Resource,
    C: ResourceClient + ?Sized,
{
    let mut state = ListState::new();
    state.settle(fetch_collection::<R, C>(client).await, diagnostics);
    state
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Sink for failed loads
pub trait Diagnostics {
    fn report(&self, message: &str, error: &ClientError);
}

/// Reports through `tracing`, which the WASM subscriber forwards to the console
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn report(&self, message: &str, error: &ClientError) {
        tracing::error!("{} {}", message, error);
    }
}

/// Keeps every report in memory
#[derive(Debug, Default)]
pub struct RecordedDiagnostics {
    entries: RefCell<Vec<String>>,
}

impl RecordedDiagnostics {
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl Diagnostics for RecordedDiagnostics {
    fn report(&self, message: &str, error: &ClientError) {
        self.entries.borrow_mut().push(format!("{} {}", message, error));
    }
}
