//! Contract domain module
//!
//! Read-only access to contracts, restricted to their participants.

mod service;

pub use service::ContractService;
