//! Unified application error types for StayHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// Input validation failed.
    Validation,
    /// Guests count exceeds the room capacity.
    CapacityExceeded,
    /// Check-out date is not strictly after check-in date.
    InvalidDateRange,
    /// Check-in date lies in the past.
    PastCheckIn,
    /// An active booking already occupies the requested date range.
    RoomUnavailable,
    /// A conflict occurred (duplicate entry, concurrent modification, etc.).
    Conflict,
    /// A database error occurred.
    Database,
    /// The persistence layer stayed unreachable after retrying.
    StorageUnavailable,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
    /// The service is temporarily unavailable.
    ServiceUnavailable,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::CapacityExceeded => write!(f, "CAPACITY_EXCEEDED"),
            Self::InvalidDateRange => write!(f, "INVALID_DATE_RANGE"),
            Self::PastCheckIn => write!(f, "PAST_CHECK_IN"),
            Self::RoomUnavailable => write!(f, "ROOM_UNAVAILABLE"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Database => write!(f, "DATABASE"),
            Self::StorageUnavailable => write!(f, "STORAGE_UNAVAILABLE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::ServiceUnavailable => write!(f, "SERVICE_UNAVAILABLE"),
        }
    }
}

/// The unified application error used throughout StayHub.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a capacity-exceeded error.
    pub fn capacity_exceeded(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CapacityExceeded, message)
    }

    /// Create an invalid-date-range error.
    pub fn invalid_date_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDateRange, message)
    }

    /// Create a past-check-in error.
    pub fn past_check_in(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PastCheckIn, message)
    }

    /// Create a room-unavailable error.
    pub fn room_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RoomUnavailable, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a storage-unavailable error.
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::StorageUnavailable, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a service-unavailable error.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message)
    }

    /// Whether this error is a booking validation failure (as opposed to an
    /// infrastructure fault). Validation failures are never retried.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Validation
                | ErrorKind::CapacityExceeded
                | ErrorKind::InvalidDateRange
                | ErrorKind::PastCheckIn
                | ErrorKind::RoomUnavailable
        )
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_kind_and_message() {
        let err = AppError::room_unavailable("Room is booked for 2024-06-01..2024-06-05");
        assert_eq!(
            err.to_string(),
            "ROOM_UNAVAILABLE: Room is booked for 2024-06-01..2024-06-05"
        );
    }

    #[test]
    fn test_validation_kinds() {
        assert!(AppError::capacity_exceeded("x").is_validation());
        assert!(AppError::invalid_date_range("x").is_validation());
        assert!(AppError::past_check_in("x").is_validation());
        assert!(AppError::room_unavailable("x").is_validation());
        assert!(!AppError::database("x").is_validation());
        assert!(!AppError::storage_unavailable("x").is_validation());
    }
}
