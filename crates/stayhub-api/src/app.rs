//! Application builder — wires repositories, services, and the router
//! into an Axum app.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use stayhub_core::config::AppConfig;
use stayhub_database::repositories::{
    booking::PgBookingRepository, category::CategoryRepository, comment::CommentRepository,
    engagement::EngagementRepository, feedback::FeedbackRepository, hotel::HotelRepository,
    post::PostRepository, review::ReviewRepository, room::PgRoomRepository, user::UserRepository,
};
use stayhub_service::blog::BlogService;
use stayhub_service::booking::BookingEngine;
use stayhub_service::feedback::FeedbackService;
use stayhub_service::hotel::HotelService;
use stayhub_service::review::ReviewService;
use stayhub_service::user::{PasswordHasher, UserService};

use crate::router::build_router;
use crate::state::AppState;

/// Construct the full dependency graph from configuration and a pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    let retry_backoff_ms = config.database.retry_backoff_ms;

    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let hotel_repo = Arc::new(HotelRepository::new(db_pool.clone()));
    let room_repo = Arc::new(PgRoomRepository::new(db_pool.clone()));
    let booking_repo = Arc::new(PgBookingRepository::new(db_pool.clone(), retry_backoff_ms));
    let review_repo = Arc::new(ReviewRepository::new(db_pool.clone()));
    let category_repo = Arc::new(CategoryRepository::new(db_pool.clone()));
    let post_repo = Arc::new(PostRepository::new(db_pool.clone()));
    let comment_repo = Arc::new(CommentRepository::new(db_pool.clone()));
    let engagement_repo = Arc::new(EngagementRepository::new(db_pool.clone()));
    let feedback_repo = Arc::new(FeedbackRepository::new(db_pool.clone()));

    let password_hasher = Arc::new(PasswordHasher::new());

    let booking_engine = Arc::new(BookingEngine::new(
        Arc::clone(&room_repo) as _,
        Arc::clone(&booking_repo) as _,
    ));
    let user_service = Arc::new(UserService::new(Arc::clone(&user_repo), password_hasher));
    let hotel_service = Arc::new(HotelService::new(
        Arc::clone(&hotel_repo),
        Arc::clone(&room_repo),
        Arc::clone(&review_repo),
    ));
    let review_service = Arc::new(ReviewService::new(
        Arc::clone(&review_repo),
        Arc::clone(&room_repo) as _,
    ));
    let blog_service = Arc::new(BlogService::new(
        category_repo,
        post_repo,
        comment_repo,
        engagement_repo,
    ));
    let feedback_service = Arc::new(FeedbackService::new(feedback_repo));

    AppState {
        config: Arc::new(config),
        db_pool,
        booking_repo,
        booking_engine,
        user_service,
        hotel_service,
        review_service,
        blog_service,
        feedback_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}
