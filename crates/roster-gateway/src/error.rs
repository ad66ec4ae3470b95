use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_core::{DirectoryError, StorageError};
use serde_json::json;
use std::fmt;

pub type Result<T> = std::result::Result<T, AppError>;

/// An error rendered as `{"error": {"message", "status"}}`.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::NotFound { message, .. } => Self::not_found(message),
            DirectoryError::Storage(source) => source.into(),
        }
    }
}

// Storage details stay in the logs.
impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        tracing::error!(error = %err, "storage operation failed");

        match err {
            StorageError::Unavailable(_) => {
                Self::new(StatusCode::SERVICE_UNAVAILABLE, "storage unavailable")
            }
            StorageError::Timeout(_) => {
                Self::new(StatusCode::GATEWAY_TIMEOUT, "storage operation timed out")
            }
            _ => Self::internal("internal server error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "message": self.message,
                "status": self.status.as_u16(),
            }
        }));

        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::EmployeeId;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::from(DirectoryError::not_found_by_id(EmployeeId::new(3)));

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Employee not found with ID 3");
    }

    #[test]
    fn storage_errors_map_by_kind() {
        let cases = [
            (
                StorageError::Unavailable("refused".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                StorageError::Timeout("pool".to_string()),
                StatusCode::GATEWAY_TIMEOUT,
            ),
            (
                StorageError::Query("syntax".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (source, expected) in cases {
            let err = AppError::from(DirectoryError::Storage(source));
            assert_eq!(err.status(), expected);
        }
    }

    #[test]
    fn internal_message_hides_details() {
        let err = AppError::from(StorageError::InvalidData("bad row 17".to_string()));

        assert!(!err.message().contains("bad row"));
    }
}
