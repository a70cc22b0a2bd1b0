use chrono::{DateTime, Utc};

use crate::{error::ShowcaseError, ShowcaseResult};

/// Renders an RFC 3339 timestamp as a relative phrase ("3 days ago").
///
/// Deltas under 45 seconds, including future timestamps, render as
/// "just now". Singular units get the article form ("a minute ago",
/// "an hour ago").
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use showcase_core::time::relative_time;
///
/// let now = Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap();
/// assert_eq!(relative_time("2024-05-01T12:00:00Z", now).unwrap(), "3 days ago");
/// ```
pub fn relative_time(timestamp: &str, now: DateTime<Utc>) -> ShowcaseResult<String> {
    let then = DateTime::parse_from_rfc3339(timestamp)
        .map_err(|_| ShowcaseError::InvalidTimestamp(timestamp.to_string()))?
        .with_timezone(&Utc);

    Ok(humanize(now.signed_duration_since(then).num_seconds()))
}

fn humanize(secs: i64) -> String {
    if secs < 45 {
        return "just now".into();
    }
    if secs < 90 {
        return "a minute ago".into();
    }

    // Round up at the halfway mark of each unit, the way humans do.
    let mins = (secs + 30) / 60;
    if mins < 45 {
        return format!("{mins} minutes ago");
    }
    if mins < 90 {
        return "an hour ago".into();
    }

    let hours = (mins + 30) / 60;
    if hours < 22 {
        return format!("{hours} hours ago");
    }
    if hours < 36 {
        return "a day ago".into();
    }

    let days = (hours + 12) / 24;
    if days < 26 {
        return format!("{days} days ago");
    }
    if days < 46 {
        return "a month ago".into();
    }
    if days < 320 {
        return format!("{} months ago", (days + 15) / 30);
    }
    if days < 548 {
        return "a year ago".into();
    }

    format!("{} years ago", (days + 182) / 365)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_exactly_now_renders_just_now() {
        assert_eq!(
            relative_time("2024-05-04T12:00:00Z", now()).unwrap(),
            "just now"
        );
    }

    #[test]
    fn test_future_timestamp_renders_just_now() {
        assert_eq!(
            relative_time("2024-05-04T13:00:00Z", now()).unwrap(),
            "just now"
        );
    }

    #[test]
    fn test_second_buckets() {
        assert_eq!(humanize(44), "just now");
        assert_eq!(humanize(45), "a minute ago");
        assert_eq!(humanize(89), "a minute ago");
        assert_eq!(humanize(90), "2 minutes ago");
    }

    #[test]
    fn test_minute_and_hour_buckets() {
        assert_eq!(humanize(10 * 60), "10 minutes ago");
        assert_eq!(humanize(44 * 60), "44 minutes ago");
        assert_eq!(humanize(45 * 60), "an hour ago");
        assert_eq!(humanize(90 * 60), "2 hours ago");
        assert_eq!(humanize(21 * 3600), "21 hours ago");
        assert_eq!(humanize(22 * 3600), "a day ago");
    }

    #[test]
    fn test_day_and_month_buckets() {
        assert_eq!(humanize(3 * 86400), "3 days ago");
        assert_eq!(humanize(25 * 86400), "25 days ago");
        assert_eq!(humanize(30 * 86400), "a month ago");
        assert_eq!(humanize(60 * 86400), "2 months ago");
        assert_eq!(humanize(300 * 86400), "10 months ago");
    }

    #[test]
    fn test_year_buckets() {
        assert_eq!(humanize(400 * 86400), "a year ago");
        assert_eq!(humanize(800 * 86400), "2 years ago");
        assert_eq!(humanize(3 * 365 * 86400), "3 years ago");
    }

    #[test]
    fn test_offset_timestamps_are_normalized() {
        assert_eq!(
            relative_time("2024-05-04T14:00:00+02:00", now()).unwrap(),
            "just now"
        );
    }

    #[test]
    fn test_invalid_timestamp_is_an_error() {
        let err = relative_time("yesterday-ish", now()).unwrap_err();
        match err {
            ShowcaseError::InvalidTimestamp(value) => assert_eq!(value, "yesterday-ish"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
