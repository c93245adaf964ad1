//! Request DTOs with validation.
//!
//! `validator` catches malformed field shapes before the services run
//! their domain rules, so handlers can assume structurally sound input.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use stayhub_entity::blog::PostStatus;
use stayhub_entity::room::RoomStatus;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub password_confirm: String,
    #[validate(length(min = 1, max = 150))]
    pub first_name: String,
    #[validate(length(min = 1, max = 150))]
    pub last_name: String,
    pub phone_number: String,
    pub bio: Option<String>,
}

/// Create hotel request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateHotelRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: String,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub country: String,
    pub star_rating: i32,
    pub phone: String,
    #[validate(email)]
    pub email: String,
}

/// Create room request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRoomRequest {
    pub hotel_id: Uuid,
    #[validate(length(min = 1, max = 20))]
    pub room_number: String,
    pub room_type_id: Uuid,
    #[serde(default)]
    pub amenity_ids: Vec<Uuid>,
    pub price_per_night: Decimal,
    #[serde(default)]
    pub discount_percentage: i32,
    pub capacity: i32,
    pub floor: i32,
    #[serde(default = "default_room_status")]
    pub status: RoomStatus,
    #[serde(default)]
    pub description: String,
}

fn default_room_status() -> RoomStatus {
    RoomStatus::Available
}

/// Partial room update request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRoomRequest {
    pub price_per_night: Option<Decimal>,
    pub discount_percentage: Option<i32>,
    pub capacity: Option<i32>,
    pub status: Option<RoomStatus>,
    pub description: Option<String>,
    pub amenity_ids: Option<Vec<Uuid>>,
}

/// Reservation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// The booking user. Reservations require a registered user.
    pub user_id: Option<Uuid>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests_count: i32,
    pub special_requests: Option<String>,
}

/// Booking status update request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: stayhub_entity::booking::BookingStatus,
}

/// Review request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    pub user_id: Uuid,
    pub cleanliness_rating: i32,
    pub comfort_rating: i32,
    pub service_rating: i32,
    pub overall_rating: i32,
    pub comment: String,
}

/// Create category request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: String,
}

/// Create post request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub author_id: Uuid,
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
    pub content: String,
    #[validate(length(max = 300))]
    pub excerpt: String,
    #[validate(url)]
    pub featured_image: Option<String>,
    #[serde(default = "default_post_status")]
    pub status: PostStatus,
}

fn default_post_status() -> PostStatus {
    PostStatus::Draft
}

/// Comment request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub user_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub content: String,
}

/// Like toggle request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleLikeRequest {
    pub user_id: Uuid,
}

/// Create bookmark list request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookmarkListRequest {
    pub user_id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub is_public: bool,
}

/// Bookmark a post request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkPostRequest {
    pub user_id: Uuid,
}

/// Feedback request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFeedbackRequest {
    #[validate(email)]
    pub email: String,
    pub message: String,
}

/// Feedback update request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFeedbackRequest {
    pub message: String,
}
