//! Railway client error types.

/// Errors from the railway ticket-query client.
#[derive(Debug, thiserror::Error)]
pub enum RailwayError {
    /// HTTP request failed (network error, timeout, TLS, etc.)
    #[error("Failed to fetch train schedule: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("Failed to fetch train schedule: API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON envelope
    #[error("Failed to decode train schedule: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RailwayError::Api {
            status: 302,
            message: "Found".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch train schedule: API error 302: Found"
        );

        let err = RailwayError::Json {
            message: "expected value at line 1 column 1".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(
            err.to_string(),
            "Failed to decode train schedule: expected value at line 1 column 1"
        );
    }
}
