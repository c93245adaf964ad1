//! # stayhub-entity
//!
//! Domain entity models for StayHub. Every struct in this crate represents a
//! database table row or a domain value object. All entities derive `Debug`,
//! `Clone`, `Serialize`, `Deserialize`, and database entities additionally
//! derive `sqlx::FromRow`.

pub mod blog;
pub mod booking;
pub mod feedback;
pub mod hotel;
pub mod review;
pub mod room;
pub mod user;
