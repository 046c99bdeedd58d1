//! Request DTOs for balance operations

use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /balances/deposit/:userId`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DepositRequest {
    /// Smallest accepted deposit is one cent
    #[validate(range(min = 0.01, message = "amount must be at least 0.01"))]
    pub amount: f64,
}
