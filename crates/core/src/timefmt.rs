//! Relative timestamps for conversation lists ("5m ago", "yesterday").

use chrono::{DateTime, Utc};

/// Describe `then` relative to `now`. Future timestamps read as "just now".
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);

    if elapsed.num_seconds() < 60 {
        return "just now".to_string();
    }
    if elapsed.num_minutes() < 60 {
        return format!("{}m ago", elapsed.num_minutes());
    }
    if elapsed.num_hours() < 24 {
        return format!("{}h ago", elapsed.num_hours());
    }
    if elapsed.num_hours() < 48 {
        return "yesterday".to_string();
    }
    if elapsed.num_days() < 7 {
        return format!("{}d ago", elapsed.num_days());
    }

    then.format("%b %-d, %Y").to_string()
}

pub fn format_relative_now(then: DateTime<Utc>) -> String {
    format_relative(then, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::format_relative;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn buckets_follow_elapsed_time() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

        assert_eq!(format_relative(now - Duration::seconds(59), now), "just now");
        assert_eq!(format_relative(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(format_relative(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(format_relative(now - Duration::hours(3), now), "3h ago");
        assert_eq!(format_relative(now - Duration::hours(30), now), "yesterday");
        assert_eq!(format_relative(now - Duration::days(3), now), "3d ago");
    }

    #[test]
    fn older_timestamps_use_calendar_date() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let then = Utc.with_ymd_and_hms(2024, 2, 1, 8, 30, 0).unwrap();
        assert_eq!(format_relative(then, now), "Feb 1, 2024");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(format_relative(now + Duration::minutes(2), now), "just now");
    }
}
