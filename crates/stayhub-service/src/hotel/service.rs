//! Hotel and room CRUD with domain validation.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_database::repositories::hotel::HotelRepository;
use stayhub_database::repositories::review::{RatingAverages, ReviewRepository};
use stayhub_database::repositories::room::PgRoomRepository;
use stayhub_database::repositories::traits::RoomRepository;
use stayhub_entity::hotel::{CreateHotel, Hotel};
use stayhub_entity::review::RoomReview;
use stayhub_entity::room::{Amenity, CreateRoom, Room, RoomType, UpdateRoom};

use crate::validation::{validate_phone_number, validate_star_rating};

/// A room expanded with its hotel, room type, amenities, reviews, and
/// per-dimension rating averages.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RoomDetail {
    pub room: Room,
    pub hotel: Hotel,
    pub room_type: Option<RoomType>,
    pub amenities: Vec<Amenity>,
    pub reviews: Vec<RoomReview>,
    pub averages: RatingAverages,
}

/// Manages hotels and their rooms.
#[derive(Debug, Clone)]
pub struct HotelService {
    hotel_repo: Arc<HotelRepository>,
    room_repo: Arc<PgRoomRepository>,
    review_repo: Arc<ReviewRepository>,
}

impl HotelService {
    /// Creates a new hotel service.
    pub fn new(
        hotel_repo: Arc<HotelRepository>,
        room_repo: Arc<PgRoomRepository>,
        review_repo: Arc<ReviewRepository>,
    ) -> Self {
        Self {
            hotel_repo,
            room_repo,
            review_repo,
        }
    }

    /// List hotels with pagination.
    pub async fn list_hotels(&self, page: PageRequest) -> AppResult<PageResponse<Hotel>> {
        self.hotel_repo.list(&page).await
    }

    /// Get a hotel by ID.
    pub async fn get_hotel(&self, id: Uuid) -> AppResult<Hotel> {
        self.hotel_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Hotel {id} not found")))
    }

    /// Number of rooms in a hotel.
    pub async fn rooms_count(&self, hotel_id: Uuid) -> AppResult<i64> {
        self.hotel_repo.rooms_count(hotel_id).await
    }

    /// Create a new hotel.
    pub async fn create_hotel(&self, req: CreateHotel) -> AppResult<Hotel> {
        if req.name.trim().len() < 5 {
            return Err(AppError::validation(
                "Hotel name must be at least 5 characters long",
            ));
        }
        validate_star_rating(req.star_rating)?;
        validate_phone_number(&req.phone)?;

        let hotel = self.hotel_repo.create(&req).await?;
        info!(hotel_id = %hotel.id, name = %hotel.name, "Hotel created");
        Ok(hotel)
    }

    /// List rooms, optionally scoped to one hotel.
    pub async fn list_rooms(
        &self,
        hotel_id: Option<Uuid>,
        page: PageRequest,
    ) -> AppResult<PageResponse<Room>> {
        self.room_repo.list(hotel_id, &page).await
    }

    /// Get a room by ID.
    pub async fn get_room(&self, id: Uuid) -> AppResult<Room> {
        self.room_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {id} not found")))
    }

    /// Create a new room in a hotel.
    pub async fn create_room(&self, req: CreateRoom) -> AppResult<Room> {
        self.get_hotel(req.hotel_id).await?;
        Self::validate_room_fields(
            req.price_per_night,
            req.discount_percentage,
            req.capacity,
            Some(req.floor),
        )?;

        let room = self.room_repo.create(&req).await?;
        info!(room_id = %room.id, hotel_id = %room.hotel_id, "Room created");
        Ok(room)
    }

    /// Apply a partial update to a room.
    pub async fn update_room(&self, id: Uuid, req: UpdateRoom) -> AppResult<Room> {
        let current = self.get_room(id).await?;
        Self::validate_room_fields(
            req.price_per_night.unwrap_or(current.price_per_night),
            req.discount_percentage.unwrap_or(current.discount_percentage),
            req.capacity.unwrap_or(current.capacity),
            None,
        )?;

        let room = self.room_repo.update(id, &req).await?;
        info!(room_id = %room.id, "Room updated");
        Ok(room)
    }

    /// Room detail: the room together with its hotel, room type,
    /// amenities, reviews, and rating averages.
    pub async fn room_detail(&self, id: Uuid) -> AppResult<RoomDetail> {
        let room = self.get_room(id).await?;
        let hotel = self.get_hotel(room.hotel_id).await?;
        let room_type = self.room_repo.find_room_type(room.room_type_id).await?;
        let amenities = self.room_repo.find_amenities(id).await?;
        let reviews = self.review_repo.find_by_room(id).await?;
        let averages = self.review_repo.rating_averages(id).await?;

        Ok(RoomDetail {
            room,
            hotel,
            room_type,
            amenities,
            reviews,
            averages,
        })
    }

    /// Number of reviews for a room.
    pub async fn reviews_count(&self, room_id: Uuid) -> AppResult<i64> {
        self.review_repo.count_by_room(room_id).await
    }

    fn validate_room_fields(
        price_per_night: Decimal,
        discount_percentage: i32,
        capacity: i32,
        floor: Option<i32>,
    ) -> AppResult<()> {
        if price_per_night < Decimal::ZERO {
            return Err(AppError::validation("Price per night cannot be negative"));
        }
        // Both boundary values are valid: 0 means no discount, 100 a free stay.
        if !(0..=100).contains(&discount_percentage) {
            return Err(AppError::validation(
                "Discount percentage must be between 0 and 100",
            ));
        }
        if !(1..=10).contains(&capacity) {
            return Err(AppError::validation("Capacity must be between 1 and 10"));
        }
        if let Some(floor) = floor {
            if floor < 0 {
                return Err(AppError::validation("Floor cannot be negative"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_boundaries_accepted() {
        for discount in [0, 50, 100] {
            assert!(
                HotelService::validate_room_fields("99.00".parse().unwrap(), discount, 2, Some(1))
                    .is_ok()
            );
        }
    }

    #[test]
    fn test_discount_out_of_range_rejected() {
        for discount in [-1, 101] {
            assert!(
                HotelService::validate_room_fields("99.00".parse().unwrap(), discount, 2, Some(1))
                    .is_err()
            );
        }
    }

    #[test]
    fn test_capacity_bounds() {
        let price: Decimal = "99.00".parse().unwrap();
        assert!(HotelService::validate_room_fields(price, 0, 1, Some(0)).is_ok());
        assert!(HotelService::validate_room_fields(price, 0, 10, Some(0)).is_ok());
        assert!(HotelService::validate_room_fields(price, 0, 0, Some(0)).is_err());
        assert!(HotelService::validate_room_fields(price, 0, 11, Some(0)).is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(
            HotelService::validate_room_fields("-1.00".parse().unwrap(), 0, 2, Some(0)).is_err()
        );
    }
}
