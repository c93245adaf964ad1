//! Blog category repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_entity::blog::Category;

/// Repository for blog categories.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a category by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find category", e))
    }

    /// List categories with pagination, ordered by name.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Category>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count categories", e)
            })?;

        let categories = sqlx::query_as::<_, Category>(
            "SELECT * FROM categories ORDER BY name ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list categories", e))?;

        Ok(PageResponse::new(
            categories,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a category with a pre-computed slug. Slugs are unique.
    pub async fn create(&self, name: &str, slug: &str, description: &str) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, slug, description) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(name)
        .bind(slug)
        .bind(description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("categories_slug_key") =>
            {
                AppError::conflict(format!("A category with slug '{slug}' already exists"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create category", e),
        })
    }
}
