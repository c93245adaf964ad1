//! Bookmark lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user-curated list of posts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookmarkList {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

/// Data required to create a bookmark list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookmarkList {
    pub user_id: Uuid,
    pub name: String,
    pub is_public: bool,
}
