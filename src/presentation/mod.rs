/// Display mappings: severity bucket, category icon, relative age
use crate::domain::{
    CategoryOption, Issue, IssueCard, SeverityBucket, ViewResponse, ViewSnapshot,
    HIGH_SEVERITY_THRESHOLD,
};
use crate::utils::{elapsed_minutes, parse_timestamp};
use chrono::{DateTime, Utc};

const ELEVATED_THRESHOLD: f64 = 60.0;
const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 1440;

/// Icon for categories the classifier does not know about
pub const FALLBACK_ICON: &str = "📢";

pub fn severity_bucket(severity: f64) -> SeverityBucket {
    if severity >= HIGH_SEVERITY_THRESHOLD {
        SeverityBucket::Critical
    } else if severity >= ELEVATED_THRESHOLD {
        SeverityBucket::Elevated
    } else {
        SeverityBucket::Nominal
    }
}

/// Width of the severity bar, in percent
pub fn fill_percent(severity: f64) -> f64 {
    if severity.is_nan() {
        return 0.0;
    }
    severity.clamp(0.0, 100.0)
}

pub fn category_icon(category: &str) -> &'static str {
    match category {
        "fire emergency" => "🔥",
        "flood" => "🌊",
        "electricity outage" => "⚡",
        "water supply" => "💧",
        "medical emergency" => "🚑",
        "road damage" => "🚧",
        "garbage collection" => "🗑️",
        "gas supply" => "🔥",
        "crime/safety" => "🚨",
        _ => FALLBACK_ICON,
    }
}

/// "Nm ago", "Nh ago" or "Nd ago" relative to `now`.
///
/// Future timestamps read "just now"; unparseable ones read "unknown".
pub fn relative_age(timestamp: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(timestamp) else {
        return "unknown".to_string();
    };
    let minutes = elapsed_minutes(then, now);
    if minutes < 0 {
        "just now".to_string()
    } else if minutes < MINUTES_PER_HOUR {
        format!("{minutes}m ago")
    } else if minutes < MINUTES_PER_DAY {
        format!("{}h ago", minutes / MINUTES_PER_HOUR)
    } else {
        format!("{}d ago", minutes / MINUTES_PER_DAY)
    }
}

pub fn issue_card(issue: Issue, now: DateTime<Utc>) -> IssueCard {
    IssueCard {
        bucket: severity_bucket(issue.severity),
        fill_percent: fill_percent(issue.severity),
        icon: category_icon(&issue.category),
        age: relative_age(&issue.timestamp, now),
        issue,
    }
}

/// Render a snapshot into the shape served to the UI
pub fn render_view(snapshot: ViewSnapshot, now: DateTime<Utc>) -> ViewResponse {
    let category_options = snapshot
        .stats
        .categories
        .iter()
        .map(|(category, count)| CategoryOption {
            category: category.clone(),
            icon: category_icon(category),
            count: *count,
        })
        .collect();

    ViewResponse {
        mode: snapshot.mode,
        preferred_mode: snapshot.preferred_mode,
        loading: snapshot.loading,
        last_error: snapshot.last_error,
        selected_category: snapshot.selected_category,
        category_count: snapshot.stats.category_count(),
        category_options,
        issues: snapshot
            .issues
            .into_iter()
            .map(|issue| issue_card(issue, now))
            .collect(),
        stats: snapshot.stats,
    }
}
