//! Display names for railway telecodes.

use std::collections::HashMap;

use crate::domain::StationCode;

/// English names for the telecodes the gateway queries by default.
const KNOWN_STATIONS: [(StationCode, &str); 2] = [
    (StationCode::SHENZHEN_NORTH, "Shenzhen North"),
    (StationCode::HONG_KONG_WEST_KOWLOON, "Hong Kong West Kowloon"),
];

/// Name for a telecode: the English name if known, otherwise the name the
/// query response supplied in its `map`, otherwise the code itself.
pub fn display_name(code: &StationCode, response_map: &HashMap<String, String>) -> String {
    KNOWN_STATIONS
        .iter()
        .find(|(known, _)| known == code)
        .map(|(_, name)| (*name).to_string())
        .or_else(|| response_map.get(code.as_str()).cloned())
        .unwrap_or_else(|| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_win() {
        let mut map = HashMap::new();
        map.insert("IOQ".to_string(), "深圳北".to_string());

        assert_eq!(display_name(&StationCode::SHENZHEN_NORTH, &map), "Shenzhen North");
        assert_eq!(
            display_name(&StationCode::HONG_KONG_WEST_KOWLOON, &map),
            "Hong Kong West Kowloon"
        );
    }

    #[test]
    fn falls_back_to_response_map_then_code() {
        let mut map = HashMap::new();
        map.insert("SZQ".to_string(), "深圳".to_string());

        let szq = StationCode::parse("SZQ").unwrap();
        assert_eq!(display_name(&szq, &map), "深圳");

        let gzq = StationCode::parse("GZQ").unwrap();
        assert_eq!(display_name(&gzq, &map), "GZQ");
    }
}
