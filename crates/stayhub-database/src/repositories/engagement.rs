//! Likes and bookmark lists.

use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::blog::{BookmarkList, CreateBookmarkList};

/// Repository for post likes and bookmark lists.
#[derive(Debug, Clone)]
pub struct EngagementRepository {
    pool: PgPool,
}

impl EngagementRepository {
    /// Create a new engagement repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Toggle a like on a post. Returns `true` when the post ends up
    /// liked, `false` when the like was removed.
    pub async fn toggle_like(&self, post_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let removed = sqlx::query("DELETE FROM post_likes WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to toggle like", e))?
            .rows_affected();

        if removed > 0 {
            return Ok(false);
        }

        sqlx::query("INSERT INTO post_likes (post_id, user_id) VALUES ($1, $2)")
            .bind(post_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to like post", e))?;
        Ok(true)
    }

    /// Whether a user has liked a post.
    pub async fn is_liked(&self, post_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM post_likes WHERE post_id = $1 AND user_id = $2)",
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check like", e))
    }

    /// Create a bookmark list.
    pub async fn create_list(&self, data: &CreateBookmarkList) -> AppResult<BookmarkList> {
        sqlx::query_as::<_, BookmarkList>(
            "INSERT INTO bookmark_lists (user_id, name, is_public) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.name)
        .bind(data.is_public)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create bookmark list", e)
        })
    }

    /// Find a bookmark list by ID.
    pub async fn find_list(&self, id: Uuid) -> AppResult<Option<BookmarkList>> {
        sqlx::query_as::<_, BookmarkList>("SELECT * FROM bookmark_lists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find bookmark list", e)
            })
    }

    /// Add a post to a bookmark list. Adding twice is a no-op.
    pub async fn add_to_list(&self, list_id: Uuid, post_id: Uuid) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO bookmark_list_posts (list_id, post_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(list_id)
        .bind(post_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to bookmark post", e))?;
        Ok(())
    }

    /// Whether any of a user's lists contains the post.
    pub async fn is_bookmarked(&self, post_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (\
                SELECT 1 FROM bookmark_list_posts blp \
                JOIN bookmark_lists bl ON bl.id = blp.list_id \
                WHERE blp.post_id = $1 AND bl.user_id = $2\
             )",
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check bookmark", e))
    }
}
