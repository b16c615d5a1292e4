//! Data transfer objects for web responses.

use serde::Serialize;

/// Outcome marker carried by every [`Envelope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Uniform wrapper for transit endpoint responses.
///
/// A success always carries `data`; an error never does. The constructors
/// are the only way to build one, so the pairing cannot drift.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    status: Status,

    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,

    message: String,
}

impl<T> Envelope<T> {
    /// A success envelope carrying `data`.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            data: Some(data),
            message: message.into(),
        }
    }
}

impl Envelope<()> {
    /// An error envelope. Has no data.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            data: None,
            message: message.into(),
        }
    }
}

/// Response for the liveness and echo endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}
