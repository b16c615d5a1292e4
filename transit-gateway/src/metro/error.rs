//! Metro client error types.

use crate::domain::TimeError;

/// Errors from the metro schedule client.
#[derive(Debug, thiserror::Error)]
pub enum MetroError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Failed to fetch MTR schedule: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("Failed to fetch MTR schedule: API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Failed to decode MTR schedule: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API responded but reported the schedule as unavailable
    #[error("MTR schedule unavailable: {message}")]
    Unavailable { message: String },

    /// Response did not include the requested line-station
    #[error("MTR schedule has no data for {key}")]
    MissingStation { key: String },

    /// Response is missing a required field
    #[error("MTR schedule is missing {0}")]
    MissingField(&'static str),

    /// A required timestamp could not be parsed
    #[error("MTR schedule has an {0}")]
    InvalidTime(#[from] TimeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_timestamp;

    #[test]
    fn error_display() {
        let err = MetroError::MissingStation {
            key: "TML-AUS".into(),
        };
        assert_eq!(err.to_string(), "MTR schedule has no data for TML-AUS");

        let err = MetroError::Unavailable {
            message: "The contents are empty!".into(),
        };
        assert_eq!(
            err.to_string(),
            "MTR schedule unavailable: The contents are empty!"
        );

        let err = MetroError::MissingField("sys_time");
        assert_eq!(err.to_string(), "MTR schedule is missing sys_time");

        let err = MetroError::from(parse_timestamp("later").unwrap_err());
        assert!(err.to_string().starts_with("MTR schedule has an invalid timestamp"));
    }
}
