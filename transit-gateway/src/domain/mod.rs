//! Domain types shared by the upstream clients and the web layer.
//!
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod direction;
mod station;
mod time;

pub use direction::Direction;
pub use station::{InvalidCode, LineCode, StationCode};
pub use time::{TimeError, parse_timestamp, whole_seconds_between};
