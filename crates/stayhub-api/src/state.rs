//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use stayhub_core::config::AppConfig;
use stayhub_database::repositories::booking::PgBookingRepository;
use stayhub_service::blog::BlogService;
use stayhub_service::booking::BookingEngine;
use stayhub_service::feedback::FeedbackService;
use stayhub_service::hotel::HotelService;
use stayhub_service::review::ReviewService;
use stayhub_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// Booking repository, used directly for listings.
    pub booking_repo: Arc<PgBookingRepository>,

    /// The booking engine.
    pub booking_engine: Arc<BookingEngine>,
    /// User registration service.
    pub user_service: Arc<UserService>,
    /// Hotel and room service.
    pub hotel_service: Arc<HotelService>,
    /// Review service.
    pub review_service: Arc<ReviewService>,
    /// Blog service.
    pub blog_service: Arc<BlogService>,
    /// Feedback service.
    pub feedback_service: Arc<FeedbackService>,
}
