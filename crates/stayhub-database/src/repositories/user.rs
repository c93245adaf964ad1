//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_entity::blog::BlogProfile;
use stayhub_entity::user::{CreateUser, User};

/// Repository for user accounts and blog profiles.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }

    /// Find a user by username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    /// Find a user by email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// List users with pagination, ordered by registration time.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;

        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))?;

        Ok(PageResponse::new(
            users,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new user. Usernames and emails are unique.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users \
             (username, email, password_hash, first_name, last_name, phone_number) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_username_key") =>
            {
                AppError::conflict(format!("Username '{}' is already taken", data.username))
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_email_key") =>
            {
                AppError::conflict(format!("Email '{}' is already registered", data.email))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Create a blog profile for a user.
    pub async fn create_blog_profile(&self, user_id: Uuid, bio: &str) -> AppResult<BlogProfile> {
        sqlx::query_as::<_, BlogProfile>(
            "INSERT INTO blog_profiles (user_id, bio) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(bio)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create blog profile", e)
        })
    }
}
