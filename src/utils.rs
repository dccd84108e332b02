/// Utility functions
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Parse an ISO-8601 timestamp, with or without offset.
///
/// Values without an offset are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&ndt));
        }
    }
    None
}

/// Whole minutes from `then` to `now`; negative when `then` is in the future
pub fn elapsed_minutes(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - then).num_minutes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_naive_iso() {
        let dt = parse_timestamp("2025-11-04T16:30:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 11, 4, 16, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_with_offset() {
        let dt = parse_timestamp("2025-11-04T18:30:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 11, 4, 16, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_fractional_seconds() {
        assert!(parse_timestamp("2025-11-04T16:30:00.123456").is_some());
        assert!(parse_timestamp("2025-11-04T16:30:00Z").is_some());
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_elapsed_minutes_truncates() {
        let then = Utc.with_ymd_and_hms(2025, 11, 4, 10, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 11, 4, 10, 59, 59).unwrap();
        assert_eq!(elapsed_minutes(then, now), 59);
        assert_eq!(elapsed_minutes(now, then), -59);
    }
}
