//! Station and line code types.

use std::fmt;

/// Error returned when parsing an invalid station or line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} code: {reason}")]
pub struct InvalidCode {
    kind: &'static str,
    reason: &'static str,
}

/// Validate a 3-letter uppercase ASCII code.
fn parse_code(s: &str, kind: &'static str) -> Result<[u8; 3], InvalidCode> {
    let bytes = s.as_bytes();

    if bytes.len() != 3 {
        return Err(InvalidCode {
            kind,
            reason: "must be exactly 3 characters",
        });
    }

    for &b in bytes {
        if !b.is_ascii_uppercase() {
            return Err(InvalidCode {
                kind,
                reason: "must be uppercase ASCII letters A-Z",
            });
        }
    }

    Ok([bytes[0], bytes[1], bytes[2]])
}

/// A valid 3-letter station code.
///
/// Both upstreams identify stations this way: MTR uses codes such as `AUS`
/// (Austin) and `HUH` (Hung Hom), and 12306 uses telecodes such as `IOQ`
/// (Shenzhen North) and `XJA` (Hong Kong West Kowloon).
///
/// # Examples
///
/// ```
/// use transit_gateway::domain::StationCode;
///
/// let aus = StationCode::parse("AUS").unwrap();
/// assert_eq!(aus.as_str(), "AUS");
///
/// // Lowercase is rejected
/// assert!(StationCode::parse("aus").is_err());
///
/// // Wrong length is rejected
/// assert!(StationCode::parse("AU").is_err());
/// assert!(StationCode::parse("AUST").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationCode([u8; 3]);

impl StationCode {
    /// Austin (metro, Tuen Ma Line).
    pub const AUSTIN: Self = Self(*b"AUS");
    /// Hung Hom (metro, Tuen Ma Line).
    pub const HUNG_HOM: Self = Self(*b"HUH");
    /// Shenzhen North (railway).
    pub const SHENZHEN_NORTH: Self = Self(*b"IOQ");
    /// Hong Kong West Kowloon (railway).
    pub const HONG_KONG_WEST_KOWLOON: Self = Self(*b"XJA");

    /// Parse a station code. The input must be exactly 3 uppercase ASCII letters.
    pub fn parse(s: &str) -> Result<Self, InvalidCode> {
        parse_code(s, "station").map(Self)
    }

    /// Parse after trimming and uppercasing, for values read from the environment.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A valid 3-letter metro line code (e.g. `TML` for the Tuen Ma Line).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineCode([u8; 3]);

impl LineCode {
    /// Tuen Ma Line.
    pub const TUEN_MA: Self = Self(*b"TML");

    /// Parse a line code. The input must be exactly 3 uppercase ASCII letters.
    pub fn parse(s: &str) -> Result<Self, InvalidCode> {
        parse_code(s, "line").map(Self)
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Key under which the schedule API files a station's data, e.g. `TML-AUS`.
    pub fn schedule_key(&self, station: &StationCode) -> String {
        format!("{}-{}", self.as_str(), station.as_str())
    }
}

impl fmt::Debug for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCode({})", self.as_str())
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
