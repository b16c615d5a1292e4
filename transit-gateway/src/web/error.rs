//! Application error type and its HTTP rendering.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::metro::MetroError;
use crate::railway::{ExtractError, RailwayError};

use super::dto::Envelope;

/// Errors surfaced by request handlers.
///
/// Every variant renders as an error [`Envelope`]; nothing escapes as a bare
/// status or an HTML page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// The request itself was malformed.
    #[error("{message}")]
    BadRequest { message: String },

    /// The upstream had no usable data for this request.
    #[error("{message}")]
    NotFound { message: String },

    /// The path exists but does not accept this method.
    #[error("{message}")]
    MethodNotAllowed { message: String },

    /// An upstream fetch or decode failed.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RailwayError> for AppError {
    fn from(e: RailwayError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<ExtractError> for AppError {
    fn from(e: ExtractError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<MetroError> for AppError {
    fn from(e: MetroError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::MethodNotAllowed { message }
            | AppError::Internal { message } => message,
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        (status, Json(Envelope::error(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            AppError::BadRequest {
                message: "x".into()
            }
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::MethodNotAllowed {
                message: "x".into()
            }
            .status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::Internal {
                message: "x".into()
            }
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn upstream_errors_are_internal() {
        let err = AppError::from(MetroError::MissingField("sys_time"));
        assert_eq!(
            err,
            AppError::Internal {
                message: "MTR schedule is missing sys_time".into()
            }
        );

        let err = AppError::from(RailwayError::Api {
            status: 503,
            message: "busy".into(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Failed to fetch train schedule: API error 503: busy"
        );
    }

    #[tokio::test]
    async fn renders_error_envelope() {
        let response = AppError::not_found("No matching trains found").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "error", "message": "No matching trains found"})
        );
    }
}
