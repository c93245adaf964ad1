//! Booking status enumeration and lifecycle rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a booking.
///
/// `Pending` and `Confirmed` bookings count against room availability;
/// `Cancelled` and `Completed` do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Created and validated, awaiting confirmation.
    Pending,
    /// Confirmed by the hotel.
    Confirmed,
    /// Cancelled before the stay.
    Cancelled,
    /// The stay has finished.
    Completed,
}

impl BookingStatus {
    /// Whether this booking blocks the room's date range.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    /// Whether a transition to `next` is allowed.
    ///
    /// Pending may confirm or cancel; confirmed may complete or cancel;
    /// cancelled and completed are terminal.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed)
                | (Self::Pending, Self::Cancelled)
                | (Self::Confirmed, Self::Completed)
                | (Self::Confirmed, Self::Cancelled)
        )
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = stayhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            _ => Err(stayhub_core::AppError::validation(format!(
                "Invalid booking status: '{s}'. Expected one of: pending, confirmed, cancelled, completed"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_statuses() {
        assert!(BookingStatus::Pending.is_active());
        assert!(BookingStatus::Confirmed.is_active());
        assert!(!BookingStatus::Cancelled.is_active());
        assert!(!BookingStatus::Completed.is_active());
    }

    #[test]
    fn test_transitions() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Completed));
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Pending));
        assert!(!BookingStatus::Completed.can_transition_to(BookingStatus::Confirmed));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Completed));
    }
}
