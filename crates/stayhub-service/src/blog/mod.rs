//! Blogging subsystem services.

pub mod service;

pub use service::{BlogService, PostEngagement};
