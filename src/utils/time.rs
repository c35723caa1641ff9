use chrono::{DateTime, Utc};

/// Format a point in time relative to `now` (e.g., "5m", "2h", "3d")
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if then > now {
        return "just now".to_string();
    }

    let diff = (now - then).num_seconds();

    match diff {
        0..=59 => "just now".to_string(),
        60..=3599 => format!("{}m", diff / 60),
        3600..=86399 => format!("{}h", diff / 3600),
        86400..=604799 => format!("{}d", diff / 86400),
        // Older than a week: show the date
        _ => then.format("%b %d").to_string(),
    }
}

/// Relative label for an RFC 3339 `datetime` attribute, None if it does not parse
pub fn relative_label(datetime: &str, now: DateTime<Utc>) -> Option<String> {
    DateTime::parse_from_rfc3339(datetime.trim())
        .ok()
        .map(|dt| format_relative_time(dt.with_timezone(&Utc), now))
}
