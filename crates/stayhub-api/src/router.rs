//! Route definitions for the StayHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, patch, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(user_routes())
        .merge(hotel_routes())
        .merge(room_routes())
        .merge(blog_routes())
        .merge(feedback_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Registration and user listing
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::users::register))
        .route("/users", get(handlers::users::list_users))
        .route("/users/{id}", get(handlers::users::get_user))
}

/// Hotel CRUD
fn hotel_routes() -> Router<AppState> {
    Router::new()
        .route("/hotels", get(handlers::hotels::list_hotels))
        .route("/hotels", post(handlers::hotels::create_hotel))
        .route("/hotels/{id}", get(handlers::hotels::get_hotel))
}

/// Rooms, nested bookings and reviews
fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(handlers::rooms::list_rooms))
        .route("/rooms", post(handlers::rooms::create_room))
        .route("/rooms/{id}", get(handlers::rooms::get_room))
        .route("/rooms/{id}", patch(handlers::rooms::update_room))
        .route("/rooms/{id}/detail", get(handlers::rooms::room_detail))
        .route("/rooms/{id}/bookings", get(handlers::bookings::list_bookings))
        .route(
            "/rooms/{id}/bookings",
            post(handlers::bookings::create_booking),
        )
        .route("/rooms/{id}/reviews", get(handlers::reviews::list_reviews))
        .route("/rooms/{id}/reviews", post(handlers::reviews::create_review))
        .route(
            "/bookings/{id}",
            patch(handlers::bookings::update_booking_status),
        )
}

/// Categories, posts, comments, likes, bookmark lists
fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::categories::list_categories))
        .route("/categories", post(handlers::categories::create_category))
        .route("/posts", get(handlers::posts::list_posts))
        .route("/posts", post(handlers::posts::create_post))
        .route("/posts/{id}", get(handlers::posts::get_post))
        .route("/posts/{id}/comments", get(handlers::posts::list_comments))
        .route("/posts/{id}/comments", post(handlers::posts::add_comment))
        .route("/posts/{id}/like", post(handlers::posts::toggle_like))
        .route(
            "/bookmark-lists",
            post(handlers::posts::create_bookmark_list),
        )
        .route(
            "/bookmark-lists/{id}/posts/{post_id}",
            post(handlers::posts::bookmark_post),
        )
}

/// Feedback intake and updates
fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route("/feedback", post(handlers::feedback::submit_feedback))
        .route("/feedback/{id}", get(handlers::feedback::get_feedback))
        .route("/feedback/{id}", put(handlers::feedback::update_feedback))
}

/// Health check endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/detailed", get(handlers::health::detailed_health))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
