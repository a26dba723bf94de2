use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, underlines with `=`, otherwise with `-`
///
/// # Returns
/// A formatted string with the header text and underline separator matching the text length
pub fn format_header(text: &str, double_line: bool) -> String {
    let separator_char = if double_line { "=" } else { "-" };
    format!("{}\n{}\n", text, separator_char.repeat(text.chars().count()))
}

fn plural(count: i64, unit: &str) -> String {
    if count > 1 {
        format!("{} {}s", count, unit)
    } else {
        format!("{} {}", count, unit)
    }
}

/// Seconds as "2 hours, 5 minutes"; seconds are only listed below one hour
pub fn seconds_to_readable(seconds: i64) -> String {
    if seconds <= 0 {
        return "0 seconds".to_string();
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let remaining = seconds % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(plural(minutes, "minute"));
    }
    if remaining > 0 && hours == 0 {
        parts.push(plural(remaining, "second"));
    }

    parts.join(", ")
}

/// Short hint next to a sleep duration input: minutes under an hour, else hours
pub fn sleep_hint(seconds: i64) -> String {
    let hours = format!("{:.1}", seconds as f64 / 3600.0);
    if hours.parse::<f64>().unwrap_or(0.0) < 1.0 {
        let minutes = (seconds as f64 / 60.0).round() as i64;
        format!("{} minutes", minutes)
    } else {
        format!("{} hours", hours)
    }
}

/// Hours expressed as days with one decimal ("7.0 days")
pub fn stateful_days(hours: i64) -> String {
    format!("{:.1} days", hours as f64 / 24.0)
}

/// Timestamp as "Jan 5, 2025, 03:04 PM", or "Never" when absent
pub fn format_timestamp<Tz>(timestamp: Option<&DateTime<Tz>>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match timestamp {
        Some(ts) => ts.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => "Never".to_string(),
    }
}

/// Byte count with a binary unit suffix ("25.0 GB")
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
