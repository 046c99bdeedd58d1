//! Middleware for the marketplace API
//!
//! This module provides request tracing and caller resolution.

pub mod auth;
mod tracing;

pub use auth::{CallerProfile, ProfileIdHeader};
pub use self::tracing::{request_tracing, REQUEST_ID_HEADER};
