//! Blog category and tag models, plus slug generation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A blog post category. `slug` is unique and derived from `name`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// A free-form post tag.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

/// Data required to create a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub description: String,
}

/// Turn arbitrary text into a URL-safe slug.
///
/// Lowercases, maps runs of non-alphanumeric characters to a single
/// hyphen, and strips leading/trailing hyphens.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut prev_hyphen = true;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            prev_hyphen = false;
        } else if !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Travel Tips"), "travel-tips");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("  City -- Guides!  "), "city-guides");
    }

    #[test]
    fn test_slugify_keeps_digits() {
        assert_eq!(slugify("Top 10 Hotels"), "top-10-hotels");
    }

    #[test]
    fn test_slugify_empty_when_no_alphanumerics() {
        assert_eq!(slugify("!!!"), "");
    }
}
