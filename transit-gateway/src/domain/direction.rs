//! Metro travel direction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of travel along a metro line, as labelled by the schedule API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// The label used as a JSON key in schedule responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_labels() {
        assert_eq!(
            serde_json::from_str::<Direction>(r#""UP""#).unwrap(),
            Direction::Up
        );
        assert_eq!(
            serde_json::from_str::<Direction>(r#""DOWN""#).unwrap(),
            Direction::Down
        );
        assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), r#""DOWN""#);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Direction::Up.to_string(), "UP");
        assert_eq!(Direction::Down.to_string(), "DOWN");
    }
}
