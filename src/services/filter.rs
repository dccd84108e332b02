/// Category selection over an issue list
use crate::domain::Issue;

/// Label meaning "no filter"
pub const ALL_CATEGORIES: &str = "all";

/// Normalize a requested selection: absent or "all" both mean no filter.
pub fn normalize_selection(selected: Option<&str>) -> Option<String> {
    match selected {
        None | Some(ALL_CATEGORIES) => None,
        Some(category) => Some(category.to_string()),
    }
}

/// Stable subsequence of `issues` whose category equals `selected` exactly
pub fn filter_by_category<'a>(issues: &'a [Issue], selected: Option<&str>) -> Vec<&'a Issue> {
    match selected {
        None | Some(ALL_CATEGORIES) => issues.iter().collect(),
        Some(category) => issues.iter().filter(|i| i.category == category).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::offline_dataset;
    use crate::sources::testing::issue;

    #[test]
    fn test_all_is_identity() {
        let issues = offline_dataset().issues;
        let all: Vec<Issue> = filter_by_category(&issues, Some("all"))
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(all, issues);
        assert_eq!(filter_by_category(&issues, None).len(), issues.len());
    }

    #[test]
    fn test_flood_selects_single_sample_issue() {
        let issues = offline_dataset().issues;
        let flood = filter_by_category(&issues, Some("flood"));
        assert_eq!(flood.len(), 1);
        assert_eq!(flood[0].id, 1002);
    }

    #[test]
    fn test_filter_is_stable_and_exact() {
        let issues = vec![
            issue(1, "flood", 10.0, ""),
            issue(2, "water supply", 10.0, ""),
            issue(3, "flood", 10.0, ""),
            issue(4, "Flood", 10.0, ""),
        ];
        let ids: Vec<i64> = filter_by_category(&issues, Some("flood"))
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let issues = offline_dataset().issues;
        assert!(filter_by_category(&issues, Some("volcano")).is_empty());
    }

    #[test]
    fn test_normalize_selection() {
        assert_eq!(normalize_selection(None), None);
        assert_eq!(normalize_selection(Some("all")), None);
        assert_eq!(normalize_selection(Some("flood")), Some("flood".to_string()));
    }
}
