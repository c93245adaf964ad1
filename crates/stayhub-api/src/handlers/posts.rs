//! Blog post, comment, like, and bookmark handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use stayhub_entity::blog::{CreateBookmarkList, CreateComment, CreatePost};

use crate::dto::request::{
    BookmarkPostRequest, CreateBookmarkListRequest, CreateCommentRequest, CreatePostRequest,
    ToggleLikeRequest,
};
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::handlers::validate_request;
use crate::state::AppState;

/// Query parameters identifying the viewer for draft visibility and
/// engagement flags.
#[derive(Debug, Deserialize)]
pub struct ViewerParams {
    pub user_id: Option<Uuid>,
}

/// GET /api/posts?user_id=...
pub async fn list_posts(
    State(state): State<AppState>,
    Query(viewer): Query<ViewerParams>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let page = state
        .blog_service
        .list_posts(viewer.user_id, params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": page })))
}

/// GET /api/posts/{id}?user_id=...
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(viewer): Query<ViewerParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let post = state.blog_service.get_post(id, viewer.user_id).await?;
    let tags = state.blog_service.post_tags(id).await?;
    let engagement = state.blog_service.post_engagement(id, viewer.user_id).await?;
    let reading_time = post.reading_time();

    Ok(Json(serde_json::json!({
        "success": true,
        "data": {
            "post": post,
            "tags": tags,
            "reading_time": reading_time,
            "engagement": engagement,
        }
    })))
}

/// POST /api/posts
pub async fn create_post(
    State(state): State<AppState>,
    Json(req): Json<CreatePostRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate_request(&req)?;

    let post = state
        .blog_service
        .create_post(CreatePost {
            title: req.title,
            author_id: req.author_id,
            category_id: req.category_id,
            tag_ids: req.tag_ids,
            content: req.content,
            excerpt: req.excerpt,
            featured_image: req.featured_image,
            status: req.status,
        })
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": post })))
}

/// GET /api/posts/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let comments = state.blog_service.list_comments(id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": comments })))
}

/// POST /api/posts/{id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let comment = state
        .blog_service
        .add_comment(CreateComment {
            post_id: id,
            user_id: req.user_id,
            parent_id: req.parent_id,
            content: req.content,
        })
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": comment })))
}

/// POST /api/posts/{id}/like
pub async fn toggle_like(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ToggleLikeRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let liked = state.blog_service.toggle_like(id, req.user_id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "liked": liked } }),
    ))
}

/// POST /api/bookmark-lists
pub async fn create_bookmark_list(
    State(state): State<AppState>,
    Json(req): Json<CreateBookmarkListRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate_request(&req)?;

    let list = state
        .blog_service
        .create_bookmark_list(CreateBookmarkList {
            user_id: req.user_id,
            name: req.name,
            is_public: req.is_public,
        })
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": list })))
}

/// POST /api/bookmark-lists/{id}/posts/{post_id}
pub async fn bookmark_post(
    State(state): State<AppState>,
    Path((id, post_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<BookmarkPostRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .blog_service
        .bookmark_post(id, post_id, req.user_id)
        .await?;

    let response = MessageResponse {
        message: "Post bookmarked".to_string(),
    };
    Ok(Json(serde_json::json!({ "success": true, "data": response })))
}
