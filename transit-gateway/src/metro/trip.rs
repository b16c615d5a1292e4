//! Fixed trips between two metro stations served by the gateway.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::{Direction, LineCode, StationCode};

use super::matcher::TripMatch;

/// A station together with its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedStation {
    pub code: StationCode,
    pub name: &'static str,
}

impl NamedStation {
    /// The name with whitespace removed, for use inside JSON keys.
    fn key_suffix(&self) -> String {
        self.name.split_whitespace().collect()
    }
}

/// A trip between two stations on the same line and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetroTrip {
    pub line: LineCode,
    pub direction: Direction,
    pub origin: NamedStation,
    pub destination: NamedStation,
}

const AUSTIN: NamedStation = NamedStation {
    code: StationCode::AUSTIN,
    name: "Austin",
};

const HUNG_HOM: NamedStation = NamedStation {
    code: StationCode::HUNG_HOM,
    name: "Hung Hom",
};

impl MetroTrip {
    /// Austin to Hung Hom on the Tuen Ma Line.
    pub const AUSTIN_TO_HUNG_HOM: Self = Self {
        line: LineCode::TUEN_MA,
        direction: Direction::Down,
        origin: AUSTIN,
        destination: HUNG_HOM,
    };

    /// Hung Hom to Austin on the Tuen Ma Line.
    pub const HUNG_HOM_TO_AUSTIN: Self = Self {
        line: LineCode::TUEN_MA,
        direction: Direction::Up,
        origin: HUNG_HOM,
        destination: AUSTIN,
    };

    /// Success message for a matched trip.
    pub fn summary(&self) -> String {
        format!(
            "Next train from {} to {}",
            self.origin.name, self.destination.name
        )
    }

    /// Message used when the origin has no departures.
    pub fn no_departures_message(&self) -> String {
        format!("No departing trains from {}", self.origin.name)
    }
}

/// The reported result for a trip.
///
/// Serializes with keys named after the trip's stations, e.g.
/// `{"departAustin": ..., "actualArrivalAtHungHom": ..., "timeUntilDeparture": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextTrain {
    departure_key: String,
    arrival_key: String,
    pub departure: String,
    pub arrival: String,
    pub time_until_departure: i64,
}

impl NextTrain {
    pub fn new(trip: &MetroTrip, matched: &TripMatch) -> Self {
        Self {
            departure_key: format!("depart{}", trip.origin.key_suffix()),
            arrival_key: format!("actualArrivalAt{}", trip.destination.key_suffix()),
            departure: matched.departure.reported.clone(),
            arrival: matched.arrival.reported.clone(),
            time_until_departure: matched.seconds_until_departure,
        }
    }
}

impl Serialize for NextTrain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(&self.departure_key, &self.departure)?;
        map.serialize_entry(&self.arrival_key, &self.arrival)?;
        map.serialize_entry("timeUntilDeparture", &self.time_until_departure)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_timestamp;
    use crate::metro::matcher::ScheduleEntry;

    fn matched() -> TripMatch {
        let entry = |s: &str| ScheduleEntry::new(parse_timestamp(s).unwrap(), s);
        TripMatch {
            departure: entry("2025-09-21 08:05:00"),
            arrival: entry("2025-09-21 08:09:00"),
            estimated_arrival: parse_timestamp("2025-09-21 08:10:00").unwrap(),
            seconds_until_departure: 300,
        }
    }

    #[test]
    fn trips_are_reverse_of_each_other() {
        let there = MetroTrip::AUSTIN_TO_HUNG_HOM;
        let back = MetroTrip::HUNG_HOM_TO_AUSTIN;

        assert_eq!(there.origin, back.destination);
        assert_eq!(there.destination, back.origin);
        assert_ne!(there.direction, back.direction);
        assert_eq!(there.line, back.line);
    }

    #[test]
    fn messages() {
        let trip = MetroTrip::AUSTIN_TO_HUNG_HOM;
        assert_eq!(trip.summary(), "Next train from Austin to Hung Hom");
        assert_eq!(trip.no_departures_message(), "No departing trains from Austin");

        let trip = MetroTrip::HUNG_HOM_TO_AUSTIN;
        assert_eq!(trip.summary(), "Next train from Hung Hom to Austin");
        assert_eq!(
            trip.no_departures_message(),
            "No departing trains from Hung Hom"
        );
    }

    #[test]
    fn serializes_with_station_keys() {
        let next = NextTrain::new(&MetroTrip::AUSTIN_TO_HUNG_HOM, &matched());

        let json = serde_json::to_value(&next).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "departAustin": "2025-09-21 08:05:00",
                "actualArrivalAtHungHom": "2025-09-21 08:09:00",
                "timeUntilDeparture": 300
            })
        );
    }

    #[test]
    fn reverse_trip_keys() {
        let next = NextTrain::new(&MetroTrip::HUNG_HOM_TO_AUSTIN, &matched());

        let json = serde_json::to_value(&next).unwrap();

        assert!(json.get("departHungHom").is_some());
        assert!(json.get("actualArrivalAtAustin").is_some());
    }
}
