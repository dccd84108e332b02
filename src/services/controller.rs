/// Orchestrates acquisition, fallback and view updates
use crate::domain::{Mode, ViewSnapshot};
use crate::services::filter::normalize_selection;
use crate::sources::DataSource;
use crate::store::{IssueStore, RefreshOutcome};
use tracing::{debug, info, warn};

pub struct Controller {
    source: DataSource,
    store: IssueStore,
}

impl Controller {
    pub fn new(source: DataSource, initial_mode: Mode) -> Self {
        Self {
            source,
            store: IssueStore::new(initial_mode),
        }
    }

    /// Run one acquisition cycle in the preferred mode.
    ///
    /// Never fails: a Live failure falls back to the offline sample and
    /// records the cause. A result superseded by a newer refresh is dropped.
    pub async fn refresh(&self) -> ViewSnapshot {
        let ticket = self.store.begin_refresh().await;
        info!(generation = ticket.generation, mode = ?ticket.mode, "refresh started");

        let outcome = match ticket.mode {
            Mode::Live => match self.source.acquire(Mode::Live).await {
                Ok(data) => {
                    info!(issues = data.issues.len(), "live data acquired");
                    RefreshOutcome {
                        data,
                        mode: Mode::Live,
                        last_error: None,
                    }
                }
                Err(e) => {
                    warn!(kind = e.kind(), error = %e, "live acquisition failed, using offline sample");
                    RefreshOutcome {
                        data: self.source.offline(),
                        mode: Mode::Offline,
                        last_error: Some(format!("Could not reach the backend ({e}). Showing sample data.")),
                    }
                }
            },
            Mode::Offline => RefreshOutcome {
                data: self.source.offline(),
                mode: Mode::Offline,
                last_error: None,
            },
        };

        if !self.store.apply(ticket, outcome).await {
            debug!(generation = ticket.generation, "refresh superseded, result discarded");
        }
        self.store.snapshot().await
    }

    /// Flip between Live and Offline, then reload in the new mode
    pub async fn toggle_mode(&self) -> ViewSnapshot {
        let mode = self.store.toggle_preferred_mode().await;
        info!(mode = ?mode, "mode toggled");
        self.refresh().await
    }

    /// Select a category; `None` or "all" clears the filter
    pub async fn set_selected_category(&self, category: Option<&str>) -> ViewSnapshot {
        let selected = normalize_selection(category);
        info!(category = selected.as_deref().unwrap_or("all"), "category selected");
        self.store.set_selected_category(selected).await;
        self.store.snapshot().await
    }

    pub async fn snapshot(&self) -> ViewSnapshot {
        self.store.snapshot().await
    }
}
