//! Reservation validation, pricing, and atomic persistence.
//!
//! Every reservation runs the same ordered pipeline: resolve the room,
//! check capacity, check date sanity, check for a past check-in, price
//! the stay, then hand the overlap check and insert to the repository
//! as one atomic step. The first failing check wins, so identical bad
//! requests always produce the same error.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_database::repositories::traits::{BookingRepository, RoomRepository};
use stayhub_entity::booking::{Booking, BookingStatus, NewBooking};
use stayhub_entity::room::Room;

/// A reservation request as received from the API layer.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BookingRequest {
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Day of departure (half-open; this day stays bookable).
    pub check_out: NaiveDate,
    /// Number of guests.
    pub guests_count: i32,
    /// Optional notes for the hotel.
    pub special_requests: Option<String>,
}

/// Validates, prices, and persists reservations.
pub struct BookingEngine {
    rooms: Arc<dyn RoomRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl BookingEngine {
    /// Create a new booking engine.
    pub fn new(rooms: Arc<dyn RoomRepository>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { rooms, bookings }
    }

    /// Reserve a room for a user.
    ///
    /// Validation order is fixed: room resolution, capacity, date
    /// sanity, past check-in, then the atomic overlap-check-and-insert.
    /// Anonymous callers are rejected before anything else runs.
    pub async fn reserve(
        &self,
        room_id: Uuid,
        user_id: Option<Uuid>,
        request: BookingRequest,
    ) -> AppResult<Booking> {
        let user_id = user_id
            .ok_or_else(|| AppError::validation("A registered user is required to book a room"))?;

        let room = self
            .rooms
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {room_id} not found")))?;

        Self::check_capacity(&room, request.guests_count)?;
        Self::check_date_order(request.check_in, request.check_out)?;
        Self::check_not_past(request.check_in, chrono::Utc::now().date_naive())?;

        let total_price = Self::price_stay(&room, request.check_in, request.check_out);

        let booking = self
            .bookings
            .reserve(NewBooking {
                room_id,
                user_id,
                check_in: request.check_in,
                check_out: request.check_out,
                guests_count: request.guests_count,
                total_price,
                status: BookingStatus::Pending,
                special_requests: request.special_requests,
            })
            .await?;

        info!(
            booking_id = %booking.id,
            room_id = %room_id,
            user_id = %user_id,
            check_in = %booking.check_in,
            check_out = %booking.check_out,
            total_price = %booking.total_price,
            "Booking created"
        );

        Ok(booking)
    }

    fn check_capacity(room: &Room, guests_count: i32) -> AppResult<()> {
        if guests_count > room.capacity {
            return Err(AppError::capacity_exceeded(format!(
                "Room {} accommodates at most {} guests, {} requested",
                room.room_number, room.capacity, guests_count
            )));
        }
        Ok(())
    }

    fn check_date_order(check_in: NaiveDate, check_out: NaiveDate) -> AppResult<()> {
        if check_out <= check_in {
            return Err(AppError::invalid_date_range(
                "Check-out date must be after check-in date",
            ));
        }
        Ok(())
    }

    fn check_not_past(check_in: NaiveDate, today: NaiveDate) -> AppResult<()> {
        if check_in < today {
            return Err(AppError::past_check_in("Check-in date cannot be in the past"));
        }
        Ok(())
    }

    /// Total price for the stay in exact decimal arithmetic: nightly
    /// rate times nights, discount applied once to the whole amount.
    /// No intermediate rounding; sub-cent precision is preserved.
    fn price_stay(room: &Room, check_in: NaiveDate, check_out: NaiveDate) -> Decimal {
        let nights = (check_out - check_in).num_days();
        let discount = Decimal::from(room.discount_percentage) / Decimal::ONE_HUNDRED;
        room.price_per_night * Decimal::from(nights) * (Decimal::ONE - discount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use stayhub_core::error::ErrorKind;
    use stayhub_entity::room::RoomStatus;

    struct InMemoryRooms {
        rooms: HashMap<Uuid, Room>,
    }

    #[async_trait]
    impl RoomRepository for InMemoryRooms {
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Room>> {
            Ok(self.rooms.get(&id).cloned())
        }
    }

    /// Booking table double. The mutex gives the same check-then-insert
    /// atomicity the Postgres repository gets from its row lock.
    struct InMemoryBookings {
        table: Mutex<Vec<Booking>>,
    }

    impl InMemoryBookings {
        fn new() -> Self {
            Self {
                table: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl BookingRepository for InMemoryBookings {
        async fn reserve(&self, booking: NewBooking) -> AppResult<Booking> {
            let mut table = self.table.lock().unwrap();
            let overlaps = table.iter().any(|existing| {
                existing.room_id == booking.room_id
                    && existing.is_active()
                    && existing.check_in < booking.check_out
                    && existing.check_out > booking.check_in
            });
            if overlaps {
                return Err(AppError::room_unavailable("Room is already booked"));
            }
            let created = Booking {
                id: Uuid::new_v4(),
                room_id: booking.room_id,
                user_id: booking.user_id,
                check_in: booking.check_in,
                check_out: booking.check_out,
                guests_count: booking.guests_count,
                total_price: booking.total_price,
                status: booking.status,
                special_requests: booking.special_requests,
                created_at: Utc::now(),
            };
            table.push(created.clone());
            Ok(created)
        }
    }

    fn room(capacity: i32, price: &str, discount: i32) -> Room {
        Room {
            id: Uuid::new_v4(),
            hotel_id: Uuid::new_v4(),
            room_number: "731".to_string(),
            room_type_id: Uuid::new_v4(),
            price_per_night: price.parse().unwrap(),
            discount_percentage: discount,
            capacity,
            floor: 7,
            status: RoomStatus::Available,
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    fn engine_with(room: Room) -> (BookingEngine, Uuid) {
        let room_id = room.id;
        let rooms = Arc::new(InMemoryRooms {
            rooms: HashMap::from([(room_id, room)]),
        });
        let bookings = Arc::new(InMemoryBookings::new());
        (BookingEngine::new(rooms, bookings), room_id)
    }

    fn request(offset_days: i64, nights: i64, guests: i32) -> BookingRequest {
        let check_in = Utc::now().date_naive() + Duration::days(offset_days);
        BookingRequest {
            check_in,
            check_out: check_in + Duration::days(nights),
            guests_count: guests,
            special_requests: None,
        }
    }

    #[tokio::test]
    async fn test_pricing_is_exact() {
        // 100.00 per night, 3 nights, 10% discount: exactly 270.00.
        let (engine, room_id) = engine_with(room(2, "100.00", 10));
        let booking = engine
            .reserve(room_id, Some(Uuid::new_v4()), request(5, 3, 2))
            .await
            .unwrap();
        assert_eq!(booking.total_price, "270.00".parse::<Decimal>().unwrap());
        assert_eq!(booking.status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn test_pricing_keeps_sub_cent_precision() {
        // 0.99 per night, 3 nights, 33% discount: 2.97 * 0.67 = 1.9899,
        // not 0.66 * 3 = 1.98 from a per-night rounding.
        let (engine, room_id) = engine_with(room(2, "0.99", 33));
        let booking = engine
            .reserve(room_id, Some(Uuid::new_v4()), request(5, 3, 2))
            .await
            .unwrap();
        assert_eq!(booking.total_price, "1.9899".parse::<Decimal>().unwrap());
    }

    #[tokio::test]
    async fn test_capacity_boundary() {
        let (engine, room_id) = engine_with(room(2, "100.00", 0));
        assert!(engine
            .reserve(room_id, Some(Uuid::new_v4()), request(5, 2, 2))
            .await
            .is_ok());
        let err = engine
            .reserve(room_id, Some(Uuid::new_v4()), request(30, 2, 3))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::CapacityExceeded);
    }

    #[tokio::test]
    async fn test_zero_night_range_rejected() {
        let (engine, room_id) = engine_with(room(2, "100.00", 0));
        let err = engine
            .reserve(room_id, Some(Uuid::new_v4()), request(5, 0, 2))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidDateRange);
    }

    #[tokio::test]
    async fn test_past_check_in_rejected() {
        let (engine, room_id) = engine_with(room(2, "100.00", 0));
        let err = engine
            .reserve(room_id, Some(Uuid::new_v4()), request(-3, 2, 2))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::PastCheckIn);
    }

    #[tokio::test]
    async fn test_unknown_room_rejected() {
        let (engine, _) = engine_with(room(2, "100.00", 0));
        let err = engine
            .reserve(Uuid::new_v4(), Some(Uuid::new_v4()), request(5, 2, 2))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_anonymous_caller_rejected() {
        let (engine, room_id) = engine_with(room(2, "100.00", 0));
        let err = engine.reserve(room_id, None, request(5, 2, 2)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_capacity_reported_before_date_errors() {
        // A request that violates both capacity and date order always
        // reports the capacity failure.
        let (engine, room_id) = engine_with(room(2, "100.00", 0));
        let err = engine
            .reserve(room_id, Some(Uuid::new_v4()), request(5, 0, 9))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::CapacityExceeded);
    }

    #[tokio::test]
    async fn test_adjacent_bookings_accepted() {
        // [a, b) then [b, c): the checkout day is free for the next guest.
        let (engine, room_id) = engine_with(room(2, "100.00", 0));
        let user = Some(Uuid::new_v4());
        engine.reserve(room_id, user, request(5, 3, 2)).await.unwrap();
        assert!(engine.reserve(room_id, user, request(8, 3, 2)).await.is_ok());
    }

    #[tokio::test]
    async fn test_contained_overlap_rejected() {
        let (engine, room_id) = engine_with(room(2, "100.00", 0));
        let user = Some(Uuid::new_v4());
        engine.reserve(room_id, user, request(5, 10, 2)).await.unwrap();
        let err = engine
            .reserve(room_id, user, request(7, 2, 2))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::RoomUnavailable);
    }

    #[tokio::test]
    async fn test_concurrent_overlapping_requests_one_wins() {
        let (engine, room_id) = engine_with(room(2, "100.00", 0));
        let engine = Arc::new(engine);

        let a = tokio::spawn({
            let engine = Arc::clone(&engine);
            async move {
                engine
                    .reserve(room_id, Some(Uuid::new_v4()), request(5, 3, 2))
                    .await
            }
        });
        let b = tokio::spawn({
            let engine = Arc::clone(&engine);
            async move {
                engine
                    .reserve(room_id, Some(Uuid::new_v4()), request(6, 3, 2))
                    .await
            }
        });

        let (a, b) = (a.await.unwrap(), b.await.unwrap());
        let successes = [&a, &b].iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);
        let failure = if a.is_err() { a } else { b };
        assert_eq!(failure.unwrap_err().kind, ErrorKind::RoomUnavailable);
    }
}
