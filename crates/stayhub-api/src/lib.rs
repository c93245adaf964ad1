//! # stayhub-api
//!
//! HTTP API layer for StayHub built on Axum.
//!
//! Provides all REST endpoints, middleware (CORS, compression, logging),
//! extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use state::AppState;
