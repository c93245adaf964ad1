//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use stayhub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// HTTP-boundary wrapper around [`AppError`].
///
/// Handlers return `Result<_, ApiError>`; the `?` operator converts any
/// `AppError` coming out of the service layer through `From`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = match &err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::CapacityExceeded => (StatusCode::BAD_REQUEST, "CAPACITY_EXCEEDED"),
            ErrorKind::InvalidDateRange => (StatusCode::BAD_REQUEST, "INVALID_DATE_RANGE"),
            ErrorKind::PastCheckIn => (StatusCode::BAD_REQUEST, "PAST_CHECK_IN"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::RoomUnavailable => (StatusCode::CONFLICT, "ROOM_UNAVAILABLE"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            ErrorKind::StorageUnavailable => {
                tracing::error!(error = %err.message, "Storage unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, "STORAGE_UNAVAILABLE")
            }
            ErrorKind::ServiceUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
            }
            ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => {
                tracing::error!(error = %err.message, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: err.message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn test_validation_family_maps_to_bad_request() {
        assert_eq!(status_of(AppError::validation("x")), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(AppError::capacity_exceeded("x")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::invalid_date_range("x")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(AppError::past_check_in("x")), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_availability_and_infrastructure_mapping() {
        assert_eq!(
            status_of(AppError::room_unavailable("x")),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AppError::storage_unavailable("x")),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(AppError::service_unavailable("x")),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(status_of(AppError::not_found("x")), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(AppError::database("x")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
