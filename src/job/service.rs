//! Job service layer - unpaid jobs and payments

use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{ApiError, ApiResult};
use crate::models::{Contract, Job, Profile};

/// Job service for listing and paying jobs
#[derive(Clone)]
pub struct JobService {
    db_pool: SqlitePool,
}

impl JobService {
    /// Create a new job service instance
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }

    /// Jobs not yet paid on the caller's `in_progress` contracts
    pub async fn list_unpaid(&self, caller_id: i64) -> ApiResult<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(
            r#"
            SELECT j.* FROM jobs j
            INNER JOIN contracts c ON c.id = j.contract_id
            WHERE (j.paid IS NULL OR j.paid = 0)
              AND c.status = 'in_progress'
              AND (c.client_id = ? OR c.contractor_id = ?)
            ORDER BY j.id
            "#,
        )
        .bind(caller_id)
        .bind(caller_id)
        .fetch_all(&self.db_pool)
        .await?;

        if jobs.is_empty() {
            return Err(ApiError::NotFound("No unpaid jobs found".to_string()));
        }

        Ok(jobs)
    }

    /// Pay for a job: move its price from the client to the contractor and
    /// mark it paid, all in one transaction.
    pub async fn pay(&self, job_id: i64, caller_id: i64) -> ApiResult<Job> {
        let mut tx = self.db_pool.begin().await?;
        let now = Utc::now();

        // The first statement must be a write: a deferred transaction that
        // reads first cannot wait for the lock upgrade and fails as busy.
        let claimed = sqlx::query(
            "UPDATE jobs SET paid = 1, payment_date = ?, updated_at = ? WHERE id = ? AND paid IS NULL",
        )
        .bind(now)
        .bind(now)
        .bind(job_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if claimed != 1 {
            return Err(ApiError::NotFound(format!("Unpaid job {} not found", job_id)));
        }

        let job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = ?")
            .bind(job_id)
            .fetch_one(&mut *tx)
            .await?;

        let contract = sqlx::query_as::<_, Contract>("SELECT * FROM contracts WHERE id = ?")
            .bind(job.contract_id)
            .fetch_one(&mut *tx)
            .await?;

        if contract.client_id != caller_id {
            tracing::warn!(job_id, profile_id = caller_id, "Only the client may pay for a job");
            return Err(ApiError::Forbidden(
                "Only the contract's client can pay for this job".to_string(),
            ));
        }

        let client = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = ?")
            .bind(contract.client_id)
            .fetch_one(&mut *tx)
            .await?;

        if client.balance < job.price {
            return Err(ApiError::InsufficientBalance {
                available: client.balance,
                required: job.price,
            });
        }

        let debited = sqlx::query(
            "UPDATE profiles SET balance = balance - ?, updated_at = ? WHERE id = ? AND balance >= ?",
        )
        .bind(job.price)
        .bind(now)
        .bind(contract.client_id)
        .bind(job.price)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if debited != 1 {
            return Err(ApiError::InsufficientBalance {
                available: client.balance,
                required: job.price,
            });
        }

        sqlx::query("UPDATE profiles SET balance = balance + ?, updated_at = ? WHERE id = ?")
            .bind(job.price)
            .bind(now)
            .bind(contract.contractor_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            job_id,
            client_id = contract.client_id,
            contractor_id = contract.contractor_id,
            amount = job.price,
            "Job paid"
        );

        Ok(job)
    }
}
