//! Blog comment repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::blog::{Comment, CreateComment};

/// Repository for post comments.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a comment by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Comment>> {
        sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find comment", e))
    }

    /// Approved comments on a post, oldest first.
    pub async fn find_approved_by_post(&self, post_id: Uuid) -> AppResult<Vec<Comment>> {
        sqlx::query_as::<_, Comment>(
            "SELECT * FROM comments WHERE post_id = $1 AND is_approved = TRUE \
             ORDER BY created_at ASC",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))
    }

    /// Create a comment. New comments start unapproved.
    pub async fn create(&self, data: &CreateComment) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (post_id, user_id, parent_id, content) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.post_id)
        .bind(data.user_id)
        .bind(data.parent_id)
        .bind(&data.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create comment", e))
    }
}
