/// Derives Stats from an issue list
use crate::domain::{Issue, Stats};
use std::collections::{BTreeMap, HashSet};

/// Total over any issue list, including an empty one.
///
/// Categories are grouped by exact, case-sensitive label. Empty locations
/// are not counted as a location.
pub fn aggregate(issues: &[Issue]) -> Stats {
    let mut categories: BTreeMap<String, u64> = BTreeMap::new();
    let mut locations: HashSet<&str> = HashSet::new();
    let mut high_severity = 0;

    for issue in issues {
        *categories.entry(issue.category.clone()).or_insert(0) += 1;
        if issue.is_high_severity() {
            high_severity += 1;
        }
        if !issue.location.is_empty() {
            locations.insert(issue.location.as_str());
        }
    }

    Stats {
        total_issues: issues.len() as u64,
        high_severity,
        categories,
        locations: locations.len() as u64,
        last_updated: None,
    }
}
