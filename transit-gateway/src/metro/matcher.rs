//! Nearest-arrival matching.
//!
//! Given the trains leaving an origin station and the trains reaching a
//! destination station on the same line and direction, picks the next
//! departure and guesses which destination arrival is the same train.
//!
//! The guess adds a fixed travel time to the departure and takes the arrival
//! closest to that estimate. This is an approximation: the real running time
//! between two stations is not checked against the timetable.

use chrono::{NaiveDateTime, TimeDelta};

use crate::domain::whole_seconds_between;

/// Assumed running time between adjacent origin and destination stations.
pub const TRAVEL_TIME_ESTIMATE: TimeDelta = TimeDelta::minutes(5);

/// One timestamped train at a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Parsed wall-clock time.
    pub time: NaiveDateTime,
    /// The time exactly as the upstream reported it.
    pub reported: String,
    /// Destination station code of the train.
    pub destination: String,
    /// Platform the train uses.
    pub platform: String,
}

impl ScheduleEntry {
    pub fn new(time: NaiveDateTime, reported: impl Into<String>) -> Self {
        Self {
            time,
            reported: reported.into(),
            destination: String::new(),
            platform: String::new(),
        }
    }
}

/// Why no trip could be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// The origin has no departures in this direction.
    #[error("no departing trains")]
    NoDepartures,

    /// The destination has no candidate arrivals.
    #[error("no matching trains found")]
    NoMatch,
}

/// A departure paired with its best-guess arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripMatch {
    pub departure: ScheduleEntry,
    pub arrival: ScheduleEntry,
    /// Departure time plus the assumed travel time.
    pub estimated_arrival: NaiveDateTime,
    /// Whole seconds from the reference time until departure. May be negative.
    pub seconds_until_departure: i64,
}

/// The entry whose time is closest to `target`.
///
/// Ties go to the entry that appears first. Returns `None` for an empty slice.
pub fn nearest(entries: &[ScheduleEntry], target: NaiveDateTime) -> Option<&ScheduleEntry> {
    let mut best: Option<(&ScheduleEntry, TimeDelta)> = None;

    for entry in entries {
        let diff = (entry.time - target).abs();
        match best {
            Some((_, best_diff)) if diff >= best_diff => {}
            _ => best = Some((entry, diff)),
        }
    }

    best.map(|(entry, _)| entry)
}

/// The earliest entry: the head of the list after a stable ascending sort by
/// time. Among equal times the entry that appears first wins.
pub fn earliest(entries: &[ScheduleEntry]) -> Option<&ScheduleEntry> {
    // min_by_key keeps the first of equal minima.
    entries.iter().min_by_key(|e| e.time)
}

/// Departure time plus the assumed travel time.
pub fn estimated_arrival(departure: NaiveDateTime, travel_time: TimeDelta) -> NaiveDateTime {
    departure + travel_time
}

/// Match the next departure to its most likely arrival.
///
/// `now` is the reference time used for `seconds_until_departure`, normally
/// the server time reported alongside the departures.
pub fn plan_trip(
    departures: &[ScheduleEntry],
    arrivals: &[ScheduleEntry],
    now: NaiveDateTime,
    travel_time: TimeDelta,
) -> Result<TripMatch, MatchError> {
    let departure = earliest(departures)
        .cloned()
        .ok_or(MatchError::NoDepartures)?;

    let estimate = estimated_arrival(departure.time, travel_time);
    let arrival = nearest(arrivals, estimate)
        .cloned()
        .ok_or(MatchError::NoMatch)?;

    Ok(TripMatch {
        seconds_until_departure: whole_seconds_between(now, departure.time),
        estimated_arrival: estimate,
        departure,
        arrival,
    })
}
