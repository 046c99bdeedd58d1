//! Route definitions for the marketplace API

mod admin;
mod balance;
mod contract;
mod job;

pub use admin::admin_routes;
pub use balance::balance_routes;
pub use contract::contract_routes;
pub use job::job_routes;
