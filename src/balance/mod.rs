//! Balance domain module
//!
//! Client deposits, capped by the client's outstanding unpaid work.

mod model;
mod service;

pub use model::*;
pub use service::{BalanceService, DEPOSIT_CAP_RATIO};
