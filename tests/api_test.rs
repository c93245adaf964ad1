//! HTTP surface tests for routing, validation rejection, and error
//! response shapes. These exercise the full router with a lazy pool,
//! covering every path that fails before touching the database.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use stayhub_core::config::AppConfig;

/// Test application wrapping the full router.
struct TestApp {
    router: Router,
}

/// Response from a test request.
#[derive(Debug)]
struct TestResponse {
    status: StatusCode,
    body: Value,
}

impl TestApp {
    /// Build the app with a lazy pool. No connection is made until a
    /// handler actually queries the database.
    fn new() -> Self {
        let config = AppConfig::load("development").expect("Failed to load config");
        let db_pool = PgPoolOptions::new()
            .connect_lazy(&config.database.url)
            .expect("Failed to build lazy pool");

        let state = stayhub_api::build_state(config, db_pool);
        let router = stayhub_api::build_app(state);
        Self { router }
    }

    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "healthy");
    assert!(response.body["data"]["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route_returns_not_found() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/nonexistent", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_register_rejects_malformed_email() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/register",
            Some(serde_json::json!({
                "username": "traveler",
                "email": "not-an-email",
                "password": "Sunrise99",
                "password_confirm": "Sunrise99",
                "first_name": "Ada",
                "last_name": "Karimova",
                "phone_number": "+998901234567",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_register_rejects_password_mismatch() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/register",
            Some(serde_json::json!({
                "username": "traveler",
                "email": "traveler@example.com",
                "password": "Sunrise99",
                "password_confirm": "Sunset11",
                "first_name": "Ada",
                "last_name": "Karimova",
                "phone_number": "+998901234567",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(response.body["message"], "Passwords do not match");
}

#[tokio::test]
async fn test_register_rejects_foreign_phone_number() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/register",
            Some(serde_json::json!({
                "username": "traveler",
                "email": "traveler@example.com",
                "password": "Sunrise99",
                "password_confirm": "Sunrise99",
                "first_name": "Ada",
                "last_name": "Karimova",
                "phone_number": "+15551234567",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_anonymous_booking_is_rejected() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/rooms/6b1a2c70-0b65-4f3d-9c51-2f8f5a1f9d10/bookings",
            Some(serde_json::json!({
                "user_id": null,
                "check_in": "2027-03-01",
                "check_out": "2027-03-04",
                "guests_count": 2,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_feedback_rejects_short_message() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/feedback",
            Some(serde_json::json!({
                "email": "guest@example.com",
                "message": "Short",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_category_name_must_start_uppercase() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({
                "name": "travel tips",
                "description": "Long-form guides for planning trips across the region.",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}
