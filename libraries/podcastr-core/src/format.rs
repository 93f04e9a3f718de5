//! Display formatting for durations and publication dates
//!
//! The content service ships durations as numeric strings and timestamps as
//! ISO-like text. Pages show durations as `HH:MM:SS` and dates as pt-BR
//! abbreviations (`"8 jan 21"`).

use crate::error::{PodcastrError, Result};
use chrono::{DateTime, Locale, NaiveDateTime, Utc};

/// Date pattern used on listing and detail pages
const PUBLISHED_AT_PATTERN: &str = "%-d %b %y";

/// Format whole seconds as a zero-padded `HH:MM:SS` string
///
/// Hours are not wrapped at 24, so long recordings keep their full length.
///
/// ```rust
/// use podcastr_core::format_duration;
///
/// assert_eq!(format_duration(0), "00:00:00");
/// assert_eq!(format_duration(65), "00:01:05");
/// assert_eq!(format_duration(3661), "01:01:01");
/// ```
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Parse a raw duration as delivered by the content service
///
/// Accepts integer or fractional seconds (the fraction is truncated).
pub fn parse_duration(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PodcastrError::invalid_input("duration is empty"));
    }

    if let Ok(seconds) = trimmed.parse::<u64>() {
        return Ok(seconds);
    }

    let seconds: f64 = trimmed
        .parse()
        .map_err(|_| PodcastrError::invalid_input(format!("duration is not numeric: {trimmed:?}")))?;

    if !seconds.is_finite() || seconds < 0.0 {
        return Err(PodcastrError::invalid_input(format!(
            "duration out of range: {trimmed:?}"
        )));
    }

    Ok(seconds.trunc() as u64)
}

/// Parse a publication timestamp
///
/// RFC 3339 is tried first; `YYYY-MM-DD HH:MM:SS` without an offset is
/// read as UTC.
pub fn parse_published_at(raw: &str) -> Result<DateTime<Utc>> {
    let trimmed = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc));
    }

    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(trimmed, pattern).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| PodcastrError::invalid_input(format!("invalid timestamp: {trimmed:?}")))
}

/// Format a publication timestamp as shown on the pages (`"8 jan 21"`)
pub fn format_published_at(published_at: &DateTime<Utc>) -> String {
    published_at
        .format_localized(PUBLISHED_AT_PATTERN, Locale::pt_BR)
        .to_string()
}
