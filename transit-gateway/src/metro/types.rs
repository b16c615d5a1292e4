//! Metro schedule API response DTOs.
//!
//! These types map directly to the `getSchedule.php` JSON response. The API
//! omits a direction entirely when no trains are scheduled in it (for example
//! at a terminus), so the per-direction lists default to empty.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::Direction;

/// Status value the API uses for a successful response.
pub const STATUS_OK: i64 = 1;

/// Response from `getSchedule.php`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleResponse {
    /// 1 for success, 0 when the schedule is unavailable.
    pub status: Option<i64>,

    /// Human-readable status message.
    #[serde(default)]
    pub message: String,

    /// Server time the response was generated ("YYYY-MM-DD HH:MM:SS").
    pub sys_time: Option<String>,

    /// Current time at the station.
    pub curr_time: Option<String>,

    /// "Y" when the line is reporting delays.
    #[serde(rename = "isdelay")]
    pub is_delay: Option<String>,

    /// Per line-station schedules, keyed like `"TML-AUS"`.
    #[serde(default)]
    pub data: HashMap<String, StationSchedule>,
}

impl ScheduleResponse {
    /// Whether the API reported success. A missing status counts as success.
    pub fn is_ok(&self) -> bool {
        self.status.is_none_or(|s| s == STATUS_OK)
    }
}

/// Schedule for one station on one line.
#[derive(Debug, Clone, Deserialize)]
pub struct StationSchedule {
    pub curr_time: Option<String>,

    pub sys_time: Option<String>,

    /// Trains travelling in the UP direction.
    #[serde(rename = "UP", default)]
    pub up: Vec<TrainArrival>,

    /// Trains travelling in the DOWN direction.
    #[serde(rename = "DOWN", default)]
    pub down: Vec<TrainArrival>,
}

impl StationSchedule {
    /// Trains in the given direction, in the API's order.
    pub fn trains(&self, direction: Direction) -> &[TrainArrival] {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        }
    }
}

/// One scheduled train at a station.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainArrival {
    /// Position in the list ("1", "2", ...).
    pub seq: Option<String>,

    /// Destination station code.
    pub dest: String,

    /// Platform number.
    #[serde(default)]
    pub plat: String,

    /// Arrival time ("YYYY-MM-DD HH:MM:SS").
    pub time: String,

    /// Minutes until arrival.
    pub ttnt: Option<String>,

    /// "Y" if the entry is valid.
    pub valid: Option<String>,

    /// Data source marker.
    pub source: Option<String>,
}
