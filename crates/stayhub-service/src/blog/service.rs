//! Categories, posts, comments, likes, and bookmark lists.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_database::repositories::category::CategoryRepository;
use stayhub_database::repositories::comment::CommentRepository;
use stayhub_database::repositories::engagement::EngagementRepository;
use stayhub_database::repositories::post::PostRepository;
use stayhub_entity::blog::{
    slugify, BookmarkList, Category, Comment, CreateBookmarkList, CreateCategory, CreateComment,
    CreatePost, Post, Tag,
};

/// Engagement counters and viewer-specific flags for a post.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PostEngagement {
    pub likes_count: i64,
    pub comments_count: i64,
    pub is_liked_by_user: bool,
    pub is_bookmarked_by_user: bool,
}

/// Manages the blogging subsystem.
#[derive(Debug, Clone)]
pub struct BlogService {
    category_repo: Arc<CategoryRepository>,
    post_repo: Arc<PostRepository>,
    comment_repo: Arc<CommentRepository>,
    engagement_repo: Arc<EngagementRepository>,
}

impl BlogService {
    /// Creates a new blog service.
    pub fn new(
        category_repo: Arc<CategoryRepository>,
        post_repo: Arc<PostRepository>,
        comment_repo: Arc<CommentRepository>,
        engagement_repo: Arc<EngagementRepository>,
    ) -> Self {
        Self {
            category_repo,
            post_repo,
            comment_repo,
            engagement_repo,
        }
    }

    // -- Categories --

    /// List categories with pagination.
    pub async fn list_categories(&self, page: PageRequest) -> AppResult<PageResponse<Category>> {
        self.category_repo.list(&page).await
    }

    /// Create a category. The slug is derived from the trimmed name.
    pub async fn create_category(&self, req: CreateCategory) -> AppResult<Category> {
        let name = req.name.trim();
        if name.len() < 3 {
            return Err(AppError::validation(
                "Category name must be at least 3 characters long",
            ));
        }
        if !name.chars().next().is_some_and(|c| c.is_uppercase()) {
            return Err(AppError::validation(
                "Category name must start with an uppercase letter",
            ));
        }
        if req.description.trim().len() < 30 {
            return Err(AppError::validation(
                "Category description must be at least 30 characters long",
            ));
        }

        let slug = slugify(name);
        let category = self
            .category_repo
            .create(name, &slug, req.description.trim())
            .await?;
        info!(category_id = %category.id, slug = %category.slug, "Category created");
        Ok(category)
    }

    // -- Posts --

    /// List posts visible to the viewer.
    pub async fn list_posts(
        &self,
        viewer: Option<Uuid>,
        page: PageRequest,
    ) -> AppResult<PageResponse<Post>> {
        self.post_repo.list_visible(viewer, &page).await
    }

    /// Fetch a post, honoring draft visibility, and count the view.
    pub async fn get_post(&self, id: Uuid, viewer: Option<Uuid>) -> AppResult<Post> {
        let post = self
            .post_repo
            .find_by_id(id)
            .await?
            .filter(|p| p.visible_to(viewer))
            .ok_or_else(|| AppError::not_found(format!("Post {id} not found")))?;

        self.post_repo.increment_view_count(id).await?;
        Ok(post)
    }

    /// Create a post. The slug is derived from the title.
    pub async fn create_post(&self, req: CreatePost) -> AppResult<Post> {
        if req.title.trim().is_empty() {
            return Err(AppError::validation("Post title cannot be empty"));
        }
        if req.excerpt.len() > 300 {
            return Err(AppError::validation(
                "Post excerpt must be at most 300 characters long",
            ));
        }

        let slug = slugify(req.title.trim());
        let post = self.post_repo.create(&req, &slug).await?;
        info!(post_id = %post.id, slug = %post.slug, "Post created");
        Ok(post)
    }

    /// Tags attached to a post.
    pub async fn post_tags(&self, post_id: Uuid) -> AppResult<Vec<Tag>> {
        self.post_repo.tags_for(post_id).await
    }

    /// Engagement counters and viewer flags for a post.
    pub async fn post_engagement(
        &self,
        post_id: Uuid,
        viewer: Option<Uuid>,
    ) -> AppResult<PostEngagement> {
        let likes_count = self.post_repo.likes_count(post_id).await?;
        let comments_count = self.post_repo.comments_count(post_id).await?;
        let (is_liked_by_user, is_bookmarked_by_user) = match viewer {
            Some(user_id) => (
                self.engagement_repo.is_liked(post_id, user_id).await?,
                self.engagement_repo.is_bookmarked(post_id, user_id).await?,
            ),
            None => (false, false),
        };

        Ok(PostEngagement {
            likes_count,
            comments_count,
            is_liked_by_user,
            is_bookmarked_by_user,
        })
    }

    // -- Comments --

    /// Approved comments on a post.
    pub async fn list_comments(&self, post_id: Uuid) -> AppResult<Vec<Comment>> {
        self.require_post(post_id).await?;
        self.comment_repo.find_approved_by_post(post_id).await
    }

    /// Add a comment to a post. Threaded replies must reference a
    /// parent comment on the same post.
    pub async fn add_comment(&self, req: CreateComment) -> AppResult<Comment> {
        self.require_post(req.post_id).await?;
        if req.content.trim().is_empty() {
            return Err(AppError::validation("Comment cannot be empty"));
        }
        if let Some(parent_id) = req.parent_id {
            let parent = self
                .comment_repo
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::not_found("Parent comment not found"))?;
            if parent.post_id != req.post_id {
                return Err(AppError::validation(
                    "Parent comment belongs to a different post",
                ));
            }
        }

        let comment = self.comment_repo.create(&req).await?;
        info!(comment_id = %comment.id, post_id = %comment.post_id, "Comment added");
        Ok(comment)
    }

    // -- Likes and bookmarks --

    /// Toggle a like on a post. Returns whether the post ends up liked.
    pub async fn toggle_like(&self, post_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        self.require_post(post_id).await?;
        let liked = self.engagement_repo.toggle_like(post_id, user_id).await?;
        info!(%post_id, %user_id, liked, "Like toggled");
        Ok(liked)
    }

    /// Create a bookmark list.
    pub async fn create_bookmark_list(
        &self,
        req: CreateBookmarkList,
    ) -> AppResult<BookmarkList> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Bookmark list name cannot be empty"));
        }
        self.engagement_repo.create_list(&req).await
    }

    /// Add a post to a bookmark list owned by `user_id`.
    pub async fn bookmark_post(
        &self,
        list_id: Uuid,
        post_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<()> {
        let list = self
            .engagement_repo
            .find_list(list_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Bookmark list {list_id} not found")))?;
        if list.user_id != user_id {
            return Err(AppError::validation(
                "Bookmark list belongs to a different user",
            ));
        }
        self.require_post(post_id).await?;
        self.engagement_repo.add_to_list(list_id, post_id).await
    }

    async fn require_post(&self, post_id: Uuid) -> AppResult<Post> {
        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Post {post_id} not found")))
    }
}
