//! Balance service layer - deposits into client accounts

use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

use crate::balance::DepositRequest;
use crate::error::{ApiError, ApiResult};
use crate::models::Profile;

/// Share of a client's unpaid job total that may be deposited at once
pub const DEPOSIT_CAP_RATIO: f64 = 0.25;

#[derive(Clone)]
pub struct BalanceService {
    db_pool: SqlitePool,
}

impl BalanceService {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }

    /// Deposit into a client's balance.
    ///
    /// The caller must be a client. The cap is computed from the *target*
    /// profile's unpaid jobs, which need not be the caller's.
    pub async fn deposit(
        &self,
        target_id: i64,
        request: &DepositRequest,
        caller: &Profile,
    ) -> ApiResult<Profile> {
        if !caller.is_client() {
            return Err(ApiError::Forbidden(
                "Only clients can make deposits".to_string(),
            ));
        }

        request.validate()?;
        let amount = request.amount;

        let mut tx = self.db_pool.begin().await?;

        // Credit first so the transaction holds the write lock before the cap
        // query; the cap check below rolls it back when exceeded.
        let credited = sqlx::query(
            "UPDATE profiles SET balance = balance + ?, updated_at = ? WHERE id = ? AND type = 'client'",
        )
        .bind(amount)
        .bind(Utc::now())
        .bind(target_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if credited != 1 {
            return Err(ApiError::NotFound(format!("Client {} not found", target_id)));
        }

        let unpaid_total = sqlx::query_scalar::<_, f64>(
            r#"
            SELECT CAST(COALESCE(SUM(j.price), 0) AS REAL)
            FROM jobs j
            INNER JOIN contracts c ON c.id = j.contract_id
            WHERE (j.paid IS NULL OR j.paid = 0)
              AND c.client_id = ?
              AND c.status = 'in_progress'
            "#,
        )
        .bind(target_id)
        .fetch_one(&mut *tx)
        .await?;

        let max_deposit = unpaid_total * DEPOSIT_CAP_RATIO;
        if amount > max_deposit {
            tracing::warn!(
                profile_id = target_id,
                amount,
                max_deposit,
                "Deposit rejected, exceeds cap"
            );
            return Err(ApiError::DepositLimitExceeded {
                amount,
                max_deposit,
            });
        }

        let updated = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = ?")
            .bind(target_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            profile_id = updated.id,
            caller_id = caller.id,
            amount,
            balance = updated.balance,
            "Deposit applied"
        );

        Ok(updated)
    }
}
