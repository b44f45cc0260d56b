//! Human-friendly durations.
//!
//! Accepts `10s`, `2m`, `1m30s`, `1h2m3s` (any subset of the groups, in that
//! order, case-insensitive) or a bare number of seconds.

use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?P<hours>\d+)h)?(?:(?P<minutes>\d+)m)?(?:(?P<seconds>\d+)s)?$")
        .expect("duration pattern is valid")
});

/// Parse a duration string into seconds.
///
/// ```
/// use clipsplit::timecode::parse_duration;
///
/// assert_eq!(parse_duration("1m30s").unwrap(), 90.0);
/// assert_eq!(parse_duration("90").unwrap(), 90.0);
/// assert!(parse_duration("").is_err());
/// ```
///
/// # Errors
///
/// [`Error::InvalidFormat`] when the text does not match the grammar, matches
/// no group at all, or adds up to zero.
pub fn parse_duration(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let invalid = || Error::InvalidFormat(trimmed.to_string());

    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        let seconds: u64 = trimmed.parse().map_err(|_| invalid())?;
        return positive(seconds as f64).ok_or_else(invalid);
    }

    let caps = DURATION_PATTERN.captures(trimmed).ok_or_else(invalid)?;

    let mut total: u64 = 0;
    let mut matched = false;
    for (group, scale) in [("hours", 3600u64), ("minutes", 60), ("seconds", 1)] {
        if let Some(m) = caps.name(group) {
            matched = true;
            let value: u64 = m.as_str().parse().map_err(|_| invalid())?;
            total = value
                .checked_mul(scale)
                .and_then(|v| total.checked_add(v))
                .ok_or_else(invalid)?;
        }
    }

    if !matched {
        return Err(invalid());
    }

    positive(total as f64).ok_or_else(invalid)
}

fn positive(seconds: f64) -> Option<f64> {
    (seconds > 0.0).then_some(seconds)
}

/// Format seconds as `HH:MM:SS.ss`.
///
/// ```
/// use clipsplit::timecode::format_hms;
///
/// assert_eq!(format_hms(3723.5), "01:02:03.50");
/// ```
pub fn format_hms(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let secs = seconds % 60.0;
    format!("{:02}:{:02}:{:05.2}", hours, minutes, secs)
}
