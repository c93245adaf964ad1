//! Room review repository implementation.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::review::{CreateReview, RoomReview};

/// Per-dimension rating averages for a room, each rounded to 2 dp.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct RatingAverages {
    pub average_cleanliness: Option<Decimal>,
    pub average_comfort: Option<Decimal>,
    pub average_service: Option<Decimal>,
    pub overall_average_rating: Option<Decimal>,
}

/// Repository for room reviews.
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Create a new review repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Reviews for a room, newest first.
    pub async fn find_by_room(&self, room_id: Uuid) -> AppResult<Vec<RoomReview>> {
        sqlx::query_as::<_, RoomReview>(
            "SELECT * FROM room_reviews WHERE room_id = $1 ORDER BY created_at DESC",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reviews", e))
    }

    /// Number of reviews for a room.
    pub async fn count_by_room(&self, room_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM room_reviews WHERE room_id = $1")
            .bind(room_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count reviews", e))
    }

    /// Per-dimension averages across all reviews of a room.
    pub async fn rating_averages(&self, room_id: Uuid) -> AppResult<RatingAverages> {
        sqlx::query_as::<_, RatingAverages>(
            "SELECT \
                ROUND(AVG(cleanliness_rating), 2) AS average_cleanliness, \
                ROUND(AVG(comfort_rating), 2) AS average_comfort, \
                ROUND(AVG(service_rating), 2) AS average_service, \
                ROUND(AVG(overall_rating), 2) AS overall_average_rating \
             FROM room_reviews WHERE room_id = $1",
        )
        .bind(room_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to compute rating averages", e)
        })
    }

    /// Create a review. One review per (user, room).
    pub async fn create(&self, data: &CreateReview) -> AppResult<RoomReview> {
        sqlx::query_as::<_, RoomReview>(
            "INSERT INTO room_reviews \
             (room_id, user_id, cleanliness_rating, comfort_rating, service_rating, \
              overall_rating, comment) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(data.room_id)
        .bind(data.user_id)
        .bind(data.cleanliness_rating)
        .bind(data.comfort_rating)
        .bind(data.service_rating)
        .bind(data.overall_rating)
        .bind(&data.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("room_reviews_room_id_user_id_key") =>
            {
                AppError::conflict("You have already reviewed this room")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create review", e),
        })
    }
}
