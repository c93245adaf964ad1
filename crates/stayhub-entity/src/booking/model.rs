//! Booking entity model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::BookingStatus;

/// A reservation of a room for a half-open date range `[check_in, check_out)`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// Reserved room.
    pub room_id: Uuid,
    /// Guest who made the booking.
    pub user_id: Uuid,
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Day of departure; not a night of the stay.
    pub check_out: NaiveDate,
    /// Number of guests.
    pub guests_count: i32,
    /// Total price for the whole stay, discount applied.
    pub total_price: Decimal,
    /// Lifecycle state.
    pub status: BookingStatus,
    /// Optional guest notes for the hotel.
    pub special_requests: Option<String>,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Number of nights covered by the stay.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Whether this booking counts against the room's availability.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// A fully validated and priced booking, ready for insertion.
///
/// Produced by the booking engine after the validation pipeline has
/// passed and the total price has been computed.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub room_id: Uuid,
    pub user_id: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests_count: i32,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub special_requests: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nights_for_half_open_range() {
        let b = Booking {
            id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            check_in: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2026, 3, 13).unwrap(),
            guests_count: 2,
            total_price: Decimal::new(27000, 2),
            status: BookingStatus::Pending,
            special_requests: None,
            created_at: Utc::now(),
        };
        assert_eq!(b.nights(), 3);
    }
}
