/// Swaparr status types and the duration/size string parsers behind the form hints

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seconds used when a duration string cannot be parsed (2h)
pub const DEFAULT_MAX_DOWNLOAD_SECS: u64 = 2 * 3600;

/// Bytes used when a size string cannot be parsed (25GB)
pub const DEFAULT_IGNORE_ABOVE_BYTES: u64 = 25 * 1024 * 1024 * 1024;

/// Parse "30m", "2h" or "1d" into seconds
pub fn parse_time_string(input: &str) -> u64 {
    let input = input.trim();
    let Some(unit) = input.chars().last() else {
        return DEFAULT_MAX_DOWNLOAD_SECS;
    };

    let number = &input[..input.len() - unit.len_utf8()];
    let value: u64 = match number.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("Invalid time string: {}, using default 2 hours", input);
            return DEFAULT_MAX_DOWNLOAD_SECS;
        }
    };

    let multiplier: u64 = match unit.to_ascii_lowercase() {
        'd' => 86400,
        'h' => 3600,
        'm' => 60,
        _ => {
            tracing::warn!("Unknown time unit in: {}, using default 2 hours", input);
            return DEFAULT_MAX_DOWNLOAD_SECS;
        }
    };

    value.checked_mul(multiplier).unwrap_or_else(|| {
        tracing::warn!("Time string too large: {}, using default 2 hours", input);
        DEFAULT_MAX_DOWNLOAD_SECS
    })
}

/// Parse "500MB", "25GB" or "1.5TB" into bytes (binary multiples)
pub fn parse_size(input: &str) -> u64 {
    let input = input.trim();
    let split = input
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_alphabetic())
        .map(|(i, c)| i + c.len_utf8());

    let Some(split) = split else {
        tracing::warn!("Invalid size string: {}, using default 25GB", input);
        return DEFAULT_IGNORE_ABOVE_BYTES;
    };

    let (number, unit) = input.split_at(split);
    let value: f64 = match number.trim().parse() {
        Ok(value) if value >= 0.0 => value,
        _ => {
            tracing::warn!("Invalid size string: {}, using default 25GB", input);
            return DEFAULT_IGNORE_ABOVE_BYTES;
        }
    };

    let multiplier: u64 = match unit.to_ascii_uppercase().as_str() {
        "B" => 1,
        "KB" => 1024,
        "MB" => 1024 * 1024,
        "GB" => 1024 * 1024 * 1024,
        "TB" => 1024 * 1024 * 1024 * 1024,
        _ => {
            tracing::warn!("Unknown size unit in: {}, using default 25GB", input);
            return DEFAULT_IGNORE_ABOVE_BYTES;
        }
    };

    (value * multiplier as f64) as u64
}

/// Counters for the current Swaparr session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionStats {
    #[serde(alias = "total_processed")]
    pub processed: u64,
    #[serde(alias = "strikes_added")]
    pub strikes: u64,
    #[serde(alias = "downloads_removed")]
    pub removals: u64,
    #[serde(alias = "items_ignored")]
    pub ignored: u64,
    pub last_run_time: Option<String>,
}

impl SessionStats {
    /// Last run as a UTC timestamp; accepts RFC 3339 or naive ISO strings
    pub fn last_run(&self) -> Option<DateTime<Utc>> {
        let raw = self.last_run_time.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|ts| ts.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|naive| naive.and_utc())
            })
    }
}

/// `GET /api/swaparr/status`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwaparrStatus {
    pub enabled: bool,
    pub session_stats: SessionStats,
}

/// Reply to the Swaparr test/run/reset actions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionResponse {
    pub success: bool,
    pub message: Option<String>,
}

/// Actions the Swaparr panel can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwaparrAction {
    Test,
    Run,
    Reset,
}

impl SwaparrAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwaparrAction::Test => "test",
            SwaparrAction::Run => "run",
            SwaparrAction::Reset => "reset",
        }
    }

    pub fn endpoint(&self) -> String {
        format!("/api/swaparr/{}", self.as_str())
    }
}
