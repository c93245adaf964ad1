//! Feedback repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::feedback::{CreateFeedback, Feedback};

/// Repository for site feedback.
#[derive(Debug, Clone)]
pub struct FeedbackRepository {
    pool: PgPool,
}

impl FeedbackRepository {
    /// Create a new feedback repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a feedback record by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Feedback>> {
        sqlx::query_as::<_, Feedback>("SELECT * FROM feedback WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find feedback", e))
    }

    /// Create a feedback record. One record per email address.
    pub async fn create(&self, data: &CreateFeedback) -> AppResult<Feedback> {
        sqlx::query_as::<_, Feedback>(
            "INSERT INTO feedback (email, message) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("feedback_email_key") =>
            {
                AppError::conflict("Feedback from this email address already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create feedback", e),
        })
    }

    /// Update the message of a feedback record.
    pub async fn update_message(&self, id: Uuid, message: &str) -> AppResult<Feedback> {
        sqlx::query_as::<_, Feedback>(
            "UPDATE feedback SET message = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(message)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update feedback", e))?
        .ok_or_else(|| AppError::not_found(format!("Feedback {id} not found")))
    }
}
