//! Persistence layer for the room booking backend.
//!
//! This crate contains:
//! - In-memory stores for rooms and notifications, one mutex per store
//! - Seed data loaded at startup
//! - Store operation metrics

pub mod error;
pub mod metrics;
pub mod repositories;
pub mod seed;

pub use error::StoreError;
