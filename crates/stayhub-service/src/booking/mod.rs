//! The booking engine.

pub mod engine;

pub use engine::{BookingEngine, BookingRequest};
