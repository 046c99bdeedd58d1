//! API handlers for the marketplace backend

pub mod admin;
pub mod balance;
pub mod contract;
pub mod health;
pub mod job;

pub use admin::*;
pub use balance::*;
pub use contract::*;
pub use health::*;
pub use job::*;

// Re-export the caller extractor for handler use
pub use crate::middleware::auth::CallerProfile;
