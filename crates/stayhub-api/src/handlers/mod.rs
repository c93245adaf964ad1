//! HTTP request handlers, grouped by domain.

pub mod bookings;
pub mod categories;
pub mod feedback;
pub mod health;
pub mod hotels;
pub mod posts;
pub mod reviews;
pub mod rooms;
pub mod users;

use stayhub_core::error::AppError;
use validator::Validate;

/// Run structural validation on a request DTO.
pub(crate) fn validate_request<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
