//! Metro real-time schedule client and nearest-arrival matching.
//!
//! The schedule API lists, per line and station, the next few trains in
//! each direction. It has no notion of a journey, so a trip between two
//! stations is reconstructed by matching the origin's next departure to the
//! destination's arrival closest to an estimated travel time.

mod client;
mod convert;
mod error;
mod matcher;
mod trip;
mod types;

pub use client::{MetroClient, MetroConfig};
pub use convert::{StationBoard, convert_schedule};
pub use error::MetroError;
pub use matcher::{
    MatchError, ScheduleEntry, TRAVEL_TIME_ESTIMATE, TripMatch, earliest, estimated_arrival,
    nearest, plan_trip,
};
pub use trip::{MetroTrip, NamedStation, NextTrain};
pub use types::{STATUS_OK, ScheduleResponse, StationSchedule, TrainArrival};
