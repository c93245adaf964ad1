//! Room, room-type, and amenity entity models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::RoomStatus;

/// A bookable room belonging to a hotel.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    /// Unique room identifier.
    pub id: Uuid,
    /// Owning hotel.
    pub hotel_id: Uuid,
    /// Room number within the hotel, e.g. `"731"`.
    pub room_number: String,
    /// Room type reference.
    pub room_type_id: Uuid,
    /// Nightly rate before discount, in the currency unit.
    pub price_per_night: Decimal,
    /// Discount percentage, 0–100 inclusive.
    pub discount_percentage: i32,
    /// Maximum number of guests.
    pub capacity: i32,
    /// Floor the room is on.
    pub floor: i32,
    /// Operational status.
    pub status: RoomStatus,
    /// Free-form description.
    pub description: String,
    /// When the room was created.
    pub created_at: DateTime<Utc>,
}

impl Room {
    /// Discount-adjusted nightly price, normalized to two decimal places.
    ///
    /// Computed with exact decimal arithmetic; binary floating point would
    /// drift on currency values.
    pub fn final_price(&self) -> Decimal {
        let discount = Decimal::from(self.discount_percentage) / Decimal::ONE_HUNDRED;
        (self.price_per_night * (Decimal::ONE - discount)).round_dp(2)
    }

    /// Whether the room is open for new reservations.
    pub fn is_available(&self) -> bool {
        self.status == RoomStatus::Available
    }
}

/// Data required to create a new room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoom {
    /// Owning hotel.
    pub hotel_id: Uuid,
    /// Room number within the hotel.
    pub room_number: String,
    /// Room type reference.
    pub room_type_id: Uuid,
    /// Amenity references.
    pub amenity_ids: Vec<Uuid>,
    /// Nightly rate before discount.
    pub price_per_night: Decimal,
    /// Discount percentage, 0–100 inclusive.
    pub discount_percentage: i32,
    /// Maximum number of guests.
    pub capacity: i32,
    /// Floor the room is on.
    pub floor: i32,
    /// Operational status.
    pub status: RoomStatus,
    /// Free-form description.
    pub description: String,
}

/// Partial update of a room. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRoom {
    /// New nightly rate.
    pub price_per_night: Option<Decimal>,
    /// New discount percentage.
    pub discount_percentage: Option<i32>,
    /// New capacity.
    pub capacity: Option<i32>,
    /// New status.
    pub status: Option<RoomStatus>,
    /// New description.
    pub description: Option<String>,
    /// Replacement amenity set.
    pub amenity_ids: Option<Vec<Uuid>>,
}

/// A category of rooms (e.g. "Standard", "Suite").
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoomType {
    /// Unique room-type identifier.
    pub id: Uuid,
    /// Type name.
    pub name: String,
    /// Free-form description.
    pub description: String,
}

/// A room amenity (e.g. "WiFi", "Minibar").
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Amenity {
    /// Unique amenity identifier.
    pub id: Uuid,
    /// Amenity name.
    pub name: String,
    /// Icon identifier for clients.
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(price: &str, discount: i32) -> Room {
        Room {
            id: Uuid::new_v4(),
            hotel_id: Uuid::new_v4(),
            room_number: "731".to_string(),
            room_type_id: Uuid::new_v4(),
            price_per_night: price.parse().unwrap(),
            discount_percentage: discount,
            capacity: 2,
            floor: 7,
            status: RoomStatus::Available,
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_final_price_applies_discount_exactly() {
        let r = room("100.00", 10);
        assert_eq!(r.final_price(), "90.00".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_final_price_without_discount() {
        let r = room("149.99", 0);
        assert_eq!(r.final_price(), "149.99".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_full_discount_is_free() {
        let r = room("100.00", 100);
        assert_eq!(r.final_price(), Decimal::ZERO);
    }
}
