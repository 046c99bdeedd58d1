//! Job domain module
//!
//! Unpaid job listing and the payment transfer between a contract's client
//! and contractor.

mod service;

pub use service::JobService;
