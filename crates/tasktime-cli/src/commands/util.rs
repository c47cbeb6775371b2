//! Shared formatting for CLI output.

use chrono::{DateTime, TimeDelta, Utc};

/// Formats a duration as `1h 5m 3s`, `45m 0s` or `12s`.
///
/// Sub-second precision is dropped. Negative durations get a leading `-`.
pub fn format_duration(duration: TimeDelta) -> String {
    let sign = if duration < TimeDelta::zero() { "-" } else { "" };
    let total_seconds = duration.num_seconds().unsigned_abs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours >= 1 {
        format!("{sign}{hours}h {minutes}m {seconds}s")
    } else if minutes >= 1 {
        format!("{sign}{minutes}m {seconds}s")
    } else {
        format!("{sign}{seconds}s")
    }
}

/// Formats a timestamp for display, to the second.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
