//! Review creation and listing with rating validation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_database::repositories::review::ReviewRepository;
use stayhub_database::repositories::traits::RoomRepository;
use stayhub_entity::review::{CreateReview, RoomReview};

use crate::validation::validate_rating;

/// Manages room reviews.
pub struct ReviewService {
    review_repo: Arc<ReviewRepository>,
    room_repo: Arc<dyn RoomRepository>,
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(review_repo: Arc<ReviewRepository>, room_repo: Arc<dyn RoomRepository>) -> Self {
        Self {
            review_repo,
            room_repo,
        }
    }

    /// Reviews for a room, newest first.
    pub async fn list_reviews(&self, room_id: Uuid) -> AppResult<Vec<RoomReview>> {
        self.room_repo
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {room_id} not found")))?;
        self.review_repo.find_by_room(room_id).await
    }

    /// Post a review for a room. One review per user per room.
    pub async fn create_review(&self, req: CreateReview) -> AppResult<RoomReview> {
        self.room_repo
            .find_by_id(req.room_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {} not found", req.room_id)))?;

        validate_rating("Cleanliness rating", req.cleanliness_rating)?;
        validate_rating("Comfort rating", req.comfort_rating)?;
        validate_rating("Service rating", req.service_rating)?;
        validate_rating("Overall rating", req.overall_rating)?;
        if req.comment.trim().len() < 10 {
            return Err(AppError::validation(
                "Review comment must be at least 10 characters long",
            ));
        }

        let review = self.review_repo.create(&req).await?;
        info!(
            review_id = %review.id,
            room_id = %review.room_id,
            user_id = %review.user_id,
            "Review posted"
        );
        Ok(review)
    }
}
