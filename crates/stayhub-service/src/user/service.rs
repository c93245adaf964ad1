//! User registration with field validation and blog profile creation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_database::repositories::user::UserRepository;
use stayhub_entity::user::{CreateUser, User};

use crate::user::password::PasswordHasher;
use crate::validation::{validate_password_strength, validate_phone_number, validate_username};

/// Registration payload.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    /// Optional author bio; longer than 20 characters creates a blog
    /// profile alongside the account.
    pub bio: Option<String>,
}

/// Manages user registration and lookup.
#[derive(Debug, Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self { user_repo, hasher }
    }

    /// Register a new user.
    pub async fn register(&self, req: RegisterUser) -> AppResult<User> {
        validate_username(&req.username)?;
        if req.password != req.password_confirm {
            return Err(AppError::validation("Passwords do not match"));
        }
        validate_password_strength(&req.password)?;
        validate_phone_number(&req.phone_number)?;

        if self
            .user_repo
            .find_by_username(&req.username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "Username '{}' is already taken",
                req.username
            )));
        }
        if self.user_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Email '{}' is already registered",
                req.email
            )));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                username: req.username,
                email: req.email,
                password_hash,
                first_name: req.first_name,
                last_name: req.last_name,
                phone_number: req.phone_number,
            })
            .await?;

        if let Some(bio) = req.bio.as_deref() {
            if bio.len() > 20 {
                self.user_repo.create_blog_profile(user.id, bio).await?;
                info!(user_id = %user.id, "Blog profile created from registration bio");
            }
        }

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Get a user by ID.
    pub async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// List users with pagination.
    pub async fn list_users(&self, page: PageRequest) -> AppResult<PageResponse<User>> {
        self.user_repo.list(&page).await
    }
}
