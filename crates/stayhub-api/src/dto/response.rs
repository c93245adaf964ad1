//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stayhub_entity::booking::{Booking, BookingStatus};
use stayhub_entity::hotel::Hotel;
use stayhub_entity::room::Room;
use stayhub_entity::user::{User, UserSummary};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Compact room representation nested in booking responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRoomResponse {
    pub id: Uuid,
    pub room_number: String,
    pub hotel_name: String,
}

/// A booking as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights_count: i64,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub user: UserSummary,
    pub room: BookingRoomResponse,
}

impl BookingResponse {
    /// Assemble the response from the booking and its related rows.
    pub fn from_parts(booking: Booking, user: &User, room: &Room, hotel: &Hotel) -> Self {
        Self {
            id: booking.id,
            check_in: booking.check_in,
            check_out: booking.check_out,
            nights_count: booking.nights(),
            total_price: booking.total_price,
            status: booking.status,
            created_at: booking.created_at,
            special_requests: booking.special_requests,
            user: UserSummary::from(user),
            room: BookingRoomResponse {
                id: room.id,
                room_number: room.room_number.clone(),
                hotel_name: hotel.name.clone(),
            },
        }
    }
}

/// A room as returned by listings. Discount is omitted when none applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomResponse {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub room_number: String,
    pub room_type_id: Uuid,
    pub price_per_night: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<i32>,
    pub final_price: Decimal,
    pub capacity: i32,
    pub floor: i32,
    pub status: stayhub_entity::room::RoomStatus,
    pub description: String,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        let is_available = room.is_available();
        Self {
            id: room.id,
            hotel_id: room.hotel_id,
            room_number: room.room_number.clone(),
            room_type_id: room.room_type_id,
            price_per_night: room.price_per_night,
            discount_percentage: (room.discount_percentage != 0)
                .then_some(room.discount_percentage),
            final_price: room.final_price(),
            capacity: room.capacity,
            floor: room.floor,
            status: room.status,
            description: room.description,
            is_available,
            created_at: room.created_at,
        }
    }
}

/// A hotel with its derived room count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelResponse {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub rooms_count: i64,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    pub status: String,
    pub database: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use stayhub_entity::room::RoomStatus;

    fn room(discount: i32) -> Room {
        Room {
            id: Uuid::new_v4(),
            hotel_id: Uuid::new_v4(),
            room_number: "12".to_string(),
            room_type_id: Uuid::new_v4(),
            price_per_night: "100.00".parse().unwrap(),
            discount_percentage: discount,
            capacity: 2,
            floor: 1,
            status: RoomStatus::Available,
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_zero_discount_is_omitted() {
        let json = serde_json::to_value(RoomResponse::from(room(0))).unwrap();
        assert!(json.get("discount_percentage").is_none());
        assert_eq!(json["final_price"], "100.00");
    }

    #[test]
    fn test_nonzero_discount_is_present() {
        let json = serde_json::to_value(RoomResponse::from(room(10))).unwrap();
        assert_eq!(json["discount_percentage"], 10);
        assert_eq!(json["final_price"], "90.00");
    }
}
