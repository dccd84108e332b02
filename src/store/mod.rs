/// The only mutable state: current ViewState plus refresh bookkeeping
use crate::domain::{Dataset, Mode, ViewSnapshot, ViewState};
use crate::services::filter::filter_by_category;
use tokio::sync::RwLock;

/// Handed out when a refresh starts; only the newest ticket may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    pub generation: u64,
    pub mode: Mode,
}

/// Result of one acquisition cycle, ready to replace the view
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    pub data: Dataset,
    pub mode: Mode,
    pub last_error: Option<String>,
}

struct StoreInner {
    view: ViewState,
    generation: u64,
    preferred_mode: Mode,
}

pub struct IssueStore {
    inner: RwLock<StoreInner>,
}

impl IssueStore {
    pub fn new(preferred_mode: Mode) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                view: ViewState::empty(preferred_mode),
                generation: 0,
                preferred_mode,
            }),
        }
    }

    /// Start a refresh: bump the generation and mark the view as loading
    pub async fn begin_refresh(&self) -> RefreshTicket {
        let mut inner = self.inner.write().await;
        inner.generation += 1;
        inner.view.loading = true;
        RefreshTicket {
            generation: inner.generation,
            mode: inner.preferred_mode,
        }
    }

    /// Replace the view wholesale. Returns false when the ticket was superseded.
    pub async fn apply(&self, ticket: RefreshTicket, outcome: RefreshOutcome) -> bool {
        let mut inner = self.inner.write().await;
        if ticket.generation != inner.generation {
            return false;
        }
        let selected_category = inner.view.selected_category.take();
        inner.view = ViewState {
            issues: outcome.data.issues,
            stats: outcome.data.stats,
            mode: outcome.mode,
            last_error: outcome.last_error,
            selected_category,
            loading: false,
        };
        true
    }

    pub async fn set_selected_category(&self, category: Option<String>) {
        self.inner.write().await.view.selected_category = category;
    }

    /// Flip the user-selected mode and return the new one
    pub async fn toggle_preferred_mode(&self) -> Mode {
        let mut inner = self.inner.write().await;
        inner.preferred_mode = inner.preferred_mode.toggled();
        inner.preferred_mode
    }

    /// Consistent read of the view with the category filter applied
    pub async fn snapshot(&self) -> ViewSnapshot {
        let inner = self.inner.read().await;
        let view = &inner.view;
        ViewSnapshot {
            issues: filter_by_category(&view.issues, view.selected_category.as_deref())
                .into_iter()
                .cloned()
                .collect(),
            stats: view.stats.clone(),
            mode: view.mode,
            preferred_mode: inner.preferred_mode,
            last_error: view.last_error.clone(),
            selected_category: view.selected_category.clone(),
            loading: view.loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::offline_dataset;

    fn offline_outcome() -> RefreshOutcome {
        RefreshOutcome {
            data: offline_dataset(),
            mode: Mode::Offline,
            last_error: None,
        }
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let store = IssueStore::new(Mode::Live);
        let snap = store.snapshot().await;
        assert!(snap.issues.is_empty());
        assert_eq!(snap.stats.total_issues, 0);
        assert_eq!(snap.mode, Mode::Live);
        assert!(!snap.loading);
        assert!(snap.last_error.is_none());
    }

    #[tokio::test]
    async fn test_begin_marks_loading_and_apply_clears_it() {
        let store = IssueStore::new(Mode::Offline);
        let ticket = store.begin_refresh().await;
        assert_eq!(ticket.mode, Mode::Offline);
        assert!(store.snapshot().await.loading);

        assert!(store.apply(ticket, offline_outcome()).await);
        let snap = store.snapshot().await;
        assert!(!snap.loading);
        assert_eq!(snap.issues.len(), 8);
    }

    #[tokio::test]
    async fn test_superseded_ticket_is_dropped() {
        let store = IssueStore::new(Mode::Live);
        let stale = store.begin_refresh().await;
        let fresh = store.begin_refresh().await;

        assert!(store.apply(fresh, offline_outcome()).await);

        let stale_outcome = RefreshOutcome {
            data: Dataset::default(),
            mode: Mode::Live,
            last_error: None,
        };
        assert!(!store.apply(stale, stale_outcome).await);

        let snap = store.snapshot().await;
        assert_eq!(snap.mode, Mode::Offline);
        assert_eq!(snap.issues.len(), 8);
    }

    #[tokio::test]
    async fn test_stale_apply_does_not_clear_loading() {
        let store = IssueStore::new(Mode::Live);
        let stale = store.begin_refresh().await;
        let _fresh = store.begin_refresh().await;

        assert!(!store.apply(stale, offline_outcome()).await);
        assert!(store.snapshot().await.loading);
    }

    #[tokio::test]
    async fn test_selection_survives_replace() {
        let store = IssueStore::new(Mode::Offline);
        store.set_selected_category(Some("flood".to_string())).await;

        let ticket = store.begin_refresh().await;
        store.apply(ticket, offline_outcome()).await;

        let snap = store.snapshot().await;
        assert_eq!(snap.selected_category.as_deref(), Some("flood"));
        assert_eq!(snap.issues.len(), 1);
        assert_eq!(snap.issues[0].id, 1002);
        // Stats are not filtered
        assert_eq!(snap.stats.total_issues, 8);
    }

    #[tokio::test]
    async fn test_toggle_preferred_mode() {
        let store = IssueStore::new(Mode::Live);
        assert_eq!(store.toggle_preferred_mode().await, Mode::Offline);
        assert_eq!(store.begin_refresh().await.mode, Mode::Offline);
        assert_eq!(store.toggle_preferred_mode().await, Mode::Live);
        assert_eq!(store.snapshot().await.preferred_mode, Mode::Live);
    }
}
