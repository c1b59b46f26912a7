use chrono::NaiveDateTime;
use std::time::Duration;

/// Format a record timestamp the way go-fuzz prints it
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y/%m/%d %H:%M:%S").to_string()
}

/// Format duration as "1:45", or "1:02:03" past an hour
pub fn format_clock(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Format duration as "1h 2m 3s", "2m 5s" or "45s"
pub fn format_duration_short(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{}s", seconds));
    }

    parts.join(" ")
}
