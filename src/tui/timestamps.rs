use chrono::{DateTime, Local, Utc};

/// Chat transcript time label:
/// - Under a minute: "just now"
/// - Under an hour: "5m ago"
/// - Otherwise local wall-clock time: "14:05"
pub fn format_turn_time(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(*timestamp).num_seconds();

    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else {
        timestamp.with_timezone(&Local).format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_just_now() {
        let now = Utc::now();
        assert_eq!(format_turn_time(&(now - Duration::seconds(10)), &now), "just now");
    }

    #[test]
    fn test_clock_skew_is_just_now() {
        let now = Utc::now();
        assert_eq!(format_turn_time(&(now + Duration::seconds(5)), &now), "just now");
    }

    #[test]
    fn test_minutes() {
        let now = Utc::now();
        assert_eq!(format_turn_time(&(now - Duration::minutes(12)), &now), "12m ago");
    }

    #[test]
    fn test_wall_clock_after_an_hour() {
        let now = Utc::now();
        let earlier = now - Duration::hours(2);
        let formatted = format_turn_time(&earlier, &now);
        assert_eq!(formatted.len(), 5);
        assert_eq!(formatted, earlier.with_timezone(&Local).format("%H:%M").to_string());
    }
}
