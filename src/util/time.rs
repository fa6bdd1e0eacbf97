//! Time parsing and interval arithmetic shared across services.
//!
//! All stored times-of-day are whole-second values: inputs are normalized at
//! the boundary so later comparisons never have to tolerate sub-second drift.
//! Absolute instants are timezone-naive throughout the system.

use chrono::{DateTime, NaiveDateTime, NaiveTime};

use crate::error::AppError;

/// Parses a wall-clock time-of-day, normalizing `HH:MM` to `HH:MM:00`.
///
/// Accepted shapes are `HH:MM` and `HH:MM:SS`; anything else (including
/// fractional seconds) is rejected so stored values stay whole-second.
///
/// # Arguments
/// - `value` - The time-of-day string to parse
///
/// # Returns
/// - `Ok(NaiveTime)` - Parsed time with seconds filled in
/// - `Err(AppError::Invalid)` - Input is not `HH:MM` or `HH:MM:SS`
pub fn normalize_time_of_day(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| {
            AppError::invalid(format!(
                "time '{}' must be in HH:MM or HH:MM:SS format",
                value
            ))
        })
}

/// Parses an ISO-8601 instant, naming the offending field on failure.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS` (optionally with fractional seconds or a
/// space separator) as a naive instant, and full RFC 3339 strings whose
/// offset is folded into UTC.
///
/// # Arguments
/// - `field` - Field name used in the error message (`start_time`/`end_time`)
/// - `value` - The datetime string to parse
///
/// # Returns
/// - `Ok(NaiveDateTime)` - Parsed instant
/// - `Err(AppError::Invalid)` - Malformed input, message names `field`
pub fn parse_instant(field: &str, value: &str) -> Result<NaiveDateTime, AppError> {
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(parsed);
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.naive_utc());
    }

    Err(AppError::invalid(format!(
        "{} is not a valid ISO-8601 datetime: '{}'",
        field, value
    )))
}

/// Half-open interval overlap test: `[start_a, end_a)` vs `[start_b, end_b)`.
///
/// Two intervals overlap iff `max(starts) < min(ends)`. Intervals that merely
/// touch (one ends exactly where the other starts) do not overlap.
///
/// # Arguments
/// - `start_a`, `end_a` - First interval
/// - `start_b`, `end_b` - Second interval
///
/// # Returns
/// - `true` - The intervals share at least one instant
pub fn ranges_overlap<T: Copy + Ord>(start_a: T, end_a: T, start_b: T, end_b: T) -> bool {
    start_a.max(start_b) < end_a.min(end_b)
}
