//! Admin reporting module
//!
//! Aggregations over paid jobs within a payment-date window.

mod model;
mod service;

pub use model::*;
pub use service::AdminService;
