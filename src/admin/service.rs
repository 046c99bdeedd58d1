//! Admin report queries

use sqlx::SqlitePool;

use crate::admin::{BestClient, BestProfession, DateWindow};
use crate::error::{ApiError, ApiResult};

#[derive(Clone)]
pub struct AdminService {
    db_pool: SqlitePool,
}

impl AdminService {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }

    /// Profession that earned the most from jobs paid within the window
    pub async fn best_profession(&self, window: &DateWindow) -> ApiResult<BestProfession> {
        let rows = sqlx::query_as::<_, BestProfession>(
            r#"
            SELECT p.profession AS profession, CAST(SUM(j.price) AS REAL) AS total_earned
            FROM profiles p
            INNER JOIN contracts c ON c.contractor_id = p.id
            INNER JOIN jobs j ON j.contract_id = c.id
            WHERE j.paid = 1
              AND julianday(j.payment_date) BETWEEN julianday(?) AND julianday(?)
            GROUP BY p.profession
            ORDER BY total_earned DESC
            LIMIT 1
            "#,
        )
        .bind(window.start)
        .bind(window.end)
        .fetch_all(&self.db_pool)
        .await
        .map_err(query_error)?;

        rows.into_iter().next().ok_or_else(|| {
            ApiError::NotFound("No data found for the given time range".to_string())
        })
    }

    /// Clients who paid the most within the window, highest first
    pub async fn best_clients(&self, window: &DateWindow, limit: i64) -> ApiResult<Vec<BestClient>> {
        let rows = sqlx::query_as::<_, BestClient>(
            r#"
            SELECT
                p.id AS id,
                p.first_name || ' ' || p.last_name AS full_name,
                CAST(SUM(j.price) AS REAL) AS total_paid
            FROM profiles p
            INNER JOIN contracts c ON c.client_id = p.id
            INNER JOIN jobs j ON j.contract_id = c.id
            WHERE j.paid = 1
              AND julianday(j.payment_date) BETWEEN julianday(?) AND julianday(?)
            GROUP BY p.id
            ORDER BY total_paid DESC
            LIMIT ?
            "#,
        )
        .bind(window.start)
        .bind(window.end)
        .bind(limit)
        .fetch_all(&self.db_pool)
        .await
        .map_err(query_error)?;

        if rows.is_empty() {
            return Err(ApiError::NotFound(
                "No data found for the given time range".to_string(),
            ));
        }

        Ok(rows)
    }
}

fn query_error(err: sqlx::Error) -> ApiError {
    tracing::error!(error = %err, "Report query failed");
    ApiError::InternalError(err.to_string())
}
