//! Timestamp handling for upstream schedule data.
//!
//! The metro schedule API reports wall-clock times in Hong Kong local time as
//! `"YYYY-MM-DD HH:MM:SS"`, without an offset. Some fixtures and older
//! responses use the ISO `T` separator instead. Both parse to the same
//! [`NaiveDateTime`]; no time zone conversion is performed because every
//! timestamp in a single response shares the same zone.

use chrono::{Duration, NaiveDateTime};

/// Formats accepted by [`parse_timestamp`], tried in order.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Error returned when parsing an invalid timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: expected YYYY-MM-DD HH:MM:SS")]
pub struct TimeError {
    input: String,
}

/// Parse an upstream wall-clock timestamp.
///
/// # Examples
///
/// ```
/// use transit_gateway::domain::parse_timestamp;
///
/// let a = parse_timestamp("2025-09-21 08:05:00").unwrap();
/// let b = parse_timestamp("2025-09-21T08:05:00").unwrap();
/// assert_eq!(a, b);
///
/// assert!(parse_timestamp("08:05").is_err());
/// assert!(parse_timestamp("").is_err());
/// ```
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, TimeError> {
    let trimmed = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| TimeError {
            input: s.to_string(),
        })
}

/// Whole seconds from `from` until `to`, rounded towards negative infinity.
///
/// Negative when `to` is already in the past.
pub fn whole_seconds_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    let delta: Duration = to.signed_duration_since(from);
    delta.num_milliseconds().div_euclid(1000)
}
