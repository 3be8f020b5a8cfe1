//! Shared utilities and common types for the room booking backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Signed login tokens (HS256 JWT)
//! - Boundary validation for date and clock-time strings

pub mod jwt;
pub mod validation;
