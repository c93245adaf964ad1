//! Blog post repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_entity::blog::{CreatePost, Post, PostStatus, Tag};

/// Repository for blog posts.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a post by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Post>> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post", e))
    }

    /// List posts visible to `viewer` (published ones plus the viewer's
    /// own drafts), newest first.
    pub async fn list_visible(
        &self,
        viewer: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Post>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM posts WHERE status <> 'draft' OR author_id = $1",
        )
        .bind(viewer)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count posts", e))?;

        let posts = sqlx::query_as::<_, Post>(
            "SELECT * FROM posts WHERE status <> 'draft' OR author_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(viewer)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list posts", e))?;

        Ok(PageResponse::new(
            posts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a post with a pre-computed slug and its tag links.
    pub async fn create(&self, data: &CreatePost, slug: &str) -> AppResult<Post> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to start transaction", e)
        })?;

        let published_date = match data.status {
            PostStatus::Published => Some(chrono::Utc::now()),
            _ => None,
        };

        let post = sqlx::query_as::<_, Post>(
            "INSERT INTO posts \
             (title, slug, author_id, category_id, content, excerpt, featured_image, status, \
              published_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(&data.title)
        .bind(slug)
        .bind(data.author_id)
        .bind(data.category_id)
        .bind(&data.content)
        .bind(&data.excerpt)
        .bind(&data.featured_image)
        .bind(data.status)
        .bind(published_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("posts_slug_key") => {
                AppError::conflict(format!("A post with slug '{slug}' already exists"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create post", e),
        })?;

        for tag_id in &data.tag_ids {
            sqlx::query("INSERT INTO post_tags (post_id, tag_id) VALUES ($1, $2)")
                .bind(post.id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to attach tag", e)
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit post creation", e)
        })?;
        Ok(post)
    }

    /// Tags attached to a post.
    pub async fn tags_for(&self, post_id: Uuid) -> AppResult<Vec<Tag>> {
        sqlx::query_as::<_, Tag>(
            "SELECT t.* FROM tags t \
             JOIN post_tags pt ON pt.tag_id = t.id \
             WHERE pt.post_id = $1 ORDER BY t.name",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load post tags", e))
    }

    /// Increment a post's view counter.
    pub async fn increment_view_count(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE posts SET view_count = view_count + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to increment view count", e)
            })?;
        Ok(())
    }

    /// Number of likes on a post.
    pub async fn likes_count(&self, post_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM post_likes WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count likes", e))
    }

    /// Number of approved comments on a post.
    pub async fn comments_count(&self, post_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM comments WHERE post_id = $1 AND is_approved = TRUE",
        )
        .bind(post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count comments", e))
    }
}
