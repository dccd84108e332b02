/// Domain models for the application
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Severity at or above this score counts as high severity
pub const HIGH_SEVERITY_THRESHOLD: f64 = 80.0;

/// One classified civic report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    pub original_text: String,
    pub category: String,
    pub confidence: f64,
    pub severity: f64,
    #[serde(default)]
    pub location: String,
    pub timestamp: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "pending".to_string()
}

impl Issue {
    pub fn is_high_severity(&self) -> bool {
        self.severity >= HIGH_SEVERITY_THRESHOLD
    }
}

/// Aggregate counts over a set of issues.
///
/// `total_issues` is required on the wire; the other counts read as
/// zero/empty when missing. Categories are kept ordered so serialized
/// output is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_issues: u64,
    #[serde(default)]
    pub high_severity: u64,
    #[serde(default)]
    pub categories: BTreeMap<String, u64>,
    #[serde(default)]
    pub locations: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl Stats {
    /// Number of distinct category labels
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Checks the totals and per-category counts against an issue list.
    ///
    /// `last_updated` is ignored.
    pub fn is_consistent_with(&self, issues: &[Issue]) -> bool {
        let total = issues.len() as u64;
        if self.total_issues != total || self.categories.values().sum::<u64>() != total {
            return false;
        }
        let high = issues.iter().filter(|i| i.is_high_severity()).count() as u64;
        let locations = issues
            .iter()
            .filter(|i| !i.location.is_empty())
            .map(|i| i.location.as_str())
            .collect::<HashSet<_>>()
            .len() as u64;
        self.high_severity == high
            && self.locations == locations
            && self
                .categories
                .iter()
                .all(|(cat, n)| issues.iter().filter(|i| &i.category == cat).count() as u64 == *n)
    }
}

/// Issues and stats acquired together
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    pub issues: Vec<Issue>,
    pub stats: Stats,
}

/// Where the data comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Live,
    Offline,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Live => Mode::Offline,
            Mode::Offline => Mode::Live,
        }
    }
}

/// Everything the renderer may look at.
///
/// Replaced wholesale by the store on every applied refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub issues: Vec<Issue>,
    pub stats: Stats,
    pub mode: Mode,
    pub last_error: Option<String>,
    pub selected_category: Option<String>,
    pub loading: bool,
}

impl ViewState {
    pub fn empty(mode: Mode) -> Self {
        Self {
            issues: Vec::new(),
            stats: Stats::default(),
            mode,
            last_error: None,
            selected_category: None,
            loading: false,
        }
    }
}

/// Read-only copy handed to the renderer, issues already filtered
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub issues: Vec<Issue>,
    pub stats: Stats,
    pub mode: Mode,
    pub preferred_mode: Mode,
    pub last_error: Option<String>,
    pub selected_category: Option<String>,
    pub loading: bool,
}

/// Severity bucket used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBucket {
    Critical,
    Elevated,
    Nominal,
}

/// Issue decorated for display
#[derive(Debug, Serialize)]
pub struct IssueCard {
    #[serde(flatten)]
    pub issue: Issue,
    pub bucket: SeverityBucket,
    pub fill_percent: f64,
    pub icon: &'static str,
    pub age: String,
}

/// Filter button entry
#[derive(Debug, Serialize)]
pub struct CategoryOption {
    pub category: String,
    pub icon: &'static str,
    pub count: u64,
}

/// Snapshot as served to the renderer
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub mode: Mode,
    pub preferred_mode: Mode,
    pub loading: bool,
    pub last_error: Option<String>,
    pub selected_category: Option<String>,
    pub stats: Stats,
    pub category_count: usize,
    pub category_options: Vec<CategoryOption>,
    pub issues: Vec<IssueCard>,
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}
