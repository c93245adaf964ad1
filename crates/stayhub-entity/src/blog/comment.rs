//! Post comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A comment on a post, optionally threaded under a parent comment.
///
/// Comments start unapproved and are hidden from public listings until
/// moderation approves them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub content: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Data required to post a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub content: String,
}
