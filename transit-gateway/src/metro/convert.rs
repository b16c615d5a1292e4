//! Conversion from schedule DTOs to matcher entries.

use chrono::NaiveDateTime;
use tracing::warn;

use crate::domain::{Direction, LineCode, StationCode, parse_timestamp};

use super::error::MetroError;
use super::matcher::ScheduleEntry;
use super::types::{ScheduleResponse, TrainArrival};

/// A station's schedule in both directions, with parsed times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationBoard {
    pub line: LineCode,
    pub station: StationCode,
    /// Server time the schedule was generated.
    pub sys_time: NaiveDateTime,
    pub up: Vec<ScheduleEntry>,
    pub down: Vec<ScheduleEntry>,
}

impl StationBoard {
    /// Trains in the given direction, in the API's order.
    pub fn trains(&self, direction: Direction) -> &[ScheduleEntry] {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        }
    }
}

/// Convert a schedule response to a [`StationBoard`] for one line-station.
///
/// Fails if the API reported an error, if the line-station is absent, or if
/// any time in it, the server time or a train's, fails to parse.
pub fn convert_schedule(
    response: &ScheduleResponse,
    line: &LineCode,
    station: &StationCode,
) -> Result<StationBoard, MetroError> {
    if !response.is_ok() {
        return Err(MetroError::Unavailable {
            message: response.message.clone(),
        });
    }

    let key = line.schedule_key(station);
    let schedule = response
        .data
        .get(&key)
        .ok_or_else(|| MetroError::MissingStation { key: key.clone() })?;

    let sys_time = response
        .sys_time
        .as_deref()
        .or(schedule.sys_time.as_deref())
        .ok_or(MetroError::MissingField("sys_time"))?;
    let sys_time = parse_timestamp(sys_time)?;

    Ok(StationBoard {
        line: *line,
        station: *station,
        sys_time,
        up: convert_trains(schedule.trains(Direction::Up), &key, Direction::Up)?,
        down: convert_trains(schedule.trains(Direction::Down), &key, Direction::Down)?,
    })
}

fn convert_trains(
    trains: &[TrainArrival],
    key: &str,
    direction: Direction,
) -> Result<Vec<ScheduleEntry>, MetroError> {
    trains
        .iter()
        .map(|train| -> Result<ScheduleEntry, MetroError> {
            let time = parse_timestamp(&train.time).inspect_err(|e| {
                warn!(station = key, %direction, dest = %train.dest, "bad train time: {e}");
            })?;
            Ok(ScheduleEntry {
                time,
                reported: train.time.clone(),
                destination: train.dest.clone(),
                platform: train.plat.clone(),
            })
        })
        .collect()
}
