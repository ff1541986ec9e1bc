//! Application error type and its HTTP mapping.
//!
//! | Variant        | Status | Body                   |
//! |----------------|--------|------------------------|
//! | `BadRequest`   | 400    | `{ message }`          |
//! | `Config`       | 500    | `{ message }`          |
//! | `Internal`     | 500    | `{ message, error }`   |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt::Display;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Client input was rejected before any store access.
    #[error("{0}")]
    BadRequest(String),

    /// The deployment is missing required configuration.
    #[error("{0}")]
    Config(String),

    /// Any other failure: store errors, corrupt rows, serialization.
    #[error("{message}: {error}")]
    Internal { message: String, error: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn internal(message: impl Into<String>, error: impl Display) -> Self {
        Self::Internal {
            message: message.into(),
            error: error.to_string(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal("Internal error", e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::BadRequest(message) => ErrorBody {
                message,
                error: None,
            },
            AppError::Config(message) => {
                tracing::error!(%message, "Configuration error");
                ErrorBody {
                    message,
                    error: None,
                }
            }
            AppError::Internal { message, error } => {
                tracing::error!(%message, %error, "Error handling stats request");
                ErrorBody {
                    message,
                    error: Some(error),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::bad_request("missing").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::config("VISITS_TABLE").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::internal("Internal error", "boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_display_includes_detail() {
        let err = AppError::internal("Internal error", "connection refused");
        assert_eq!(err.to_string(), "Internal error: connection refused");
    }

    #[test]
    fn test_sqlx_error_becomes_internal() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_error_body_omits_missing_detail() {
        let body = ErrorBody {
            message: "bad".to_string(),
            error: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "bad" }));
    }
}
