//! # stayhub-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all StayHub entities. The booking repository
//! additionally exposes the atomic reserve primitive the booking
//! engine depends on.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
