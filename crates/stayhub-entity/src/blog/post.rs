//! Blog post model and publication status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Publication state of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "post_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = stayhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            _ => Err(stayhub_core::AppError::validation(format!(
                "Invalid post status: '{s}'. Expected one of: draft, published, archived"
            ))),
        }
    }
}

/// A blog post.
///
/// Draft posts are visible only to their author; the service layer
/// enforces that rule when fetching.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub author_id: Uuid,
    pub category_id: Option<Uuid>,
    pub content: String,
    /// Short summary, at most 300 characters.
    pub excerpt: String,
    pub featured_image: Option<String>,
    pub status: PostStatus,
    pub view_count: i32,
    pub published_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Estimated reading time at 200 words per minute, never below one
    /// minute, formatted as `"N min"`.
    pub fn reading_time(&self) -> String {
        let words = self.content.split_whitespace().count();
        let minutes = std::cmp::max(1, words / 200);
        format!("{minutes} min")
    }

    /// Whether `viewer` may see this post.
    pub fn visible_to(&self, viewer: Option<Uuid>) -> bool {
        match self.status {
            PostStatus::Draft => viewer == Some(self.author_id),
            PostStatus::Published | PostStatus::Archived => true,
        }
    }
}

/// Data required to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub author_id: Uuid,
    pub category_id: Option<Uuid>,
    pub tag_ids: Vec<Uuid>,
    pub content: String,
    pub excerpt: String,
    pub featured_image: Option<String>,
    pub status: PostStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(content: &str, status: PostStatus) -> Post {
        Post {
            id: Uuid::new_v4(),
            title: "A post".to_string(),
            slug: "a-post".to_string(),
            author_id: Uuid::new_v4(),
            category_id: None,
            content: content.to_string(),
            excerpt: String::new(),
            featured_image: None,
            status,
            view_count: 0,
            published_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_reading_time_has_a_floor_of_one_minute() {
        assert_eq!(post("just a few words", PostStatus::Published).reading_time(), "1 min");
    }

    #[test]
    fn test_reading_time_scales_with_word_count() {
        let content = "word ".repeat(650);
        assert_eq!(post(&content, PostStatus::Published).reading_time(), "3 min");
    }

    #[test]
    fn test_draft_visible_only_to_author() {
        let p = post("body", PostStatus::Draft);
        assert!(p.visible_to(Some(p.author_id)));
        assert!(!p.visible_to(Some(Uuid::new_v4())));
        assert!(!p.visible_to(None));
    }

    #[test]
    fn test_published_visible_to_anyone() {
        let p = post("body", PostStatus::Published);
        assert!(p.visible_to(None));
    }
}
