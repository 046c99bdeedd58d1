use sqlx::SqlitePool;

use crate::error::{ApiError, ApiResult};
use crate::models::{Contract, ContractDetails, Profile};

#[derive(Clone)]
pub struct ContractService {
    db_pool: SqlitePool,
}

impl ContractService {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }

    /// Get a contract with both of its profiles.
    ///
    /// Only the contract's client or contractor may read it.
    pub async fn get_contract(&self, id: i64, caller_id: i64) -> ApiResult<ContractDetails> {
        let contract = sqlx::query_as::<_, Contract>("SELECT * FROM contracts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Contract {} not found", id)))?;

        if !contract.involves(caller_id) {
            tracing::warn!(
                contract_id = id,
                profile_id = caller_id,
                "Profile is not a participant of the contract"
            );
            return Err(ApiError::Forbidden(
                "Profile is not a participant of this contract".to_string(),
            ));
        }

        let client = self.fetch_profile(contract.client_id).await?;
        let contractor = self.fetch_profile(contract.contractor_id).await?;

        Ok(ContractDetails {
            contract,
            client,
            contractor,
        })
    }

    /// List the caller's contracts that are not terminated
    pub async fn list_contracts(&self, caller_id: i64) -> ApiResult<Vec<Contract>> {
        let contracts = sqlx::query_as::<_, Contract>(
            r#"
            SELECT * FROM contracts
            WHERE status != 'terminated'
              AND (client_id = ? OR contractor_id = ?)
            ORDER BY id
            "#,
        )
        .bind(caller_id)
        .bind(caller_id)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(contracts)
    }

    async fn fetch_profile(&self, id: i64) -> ApiResult<Profile> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = ?")
            .bind(id)
            .fetch_one(&self.db_pool)
            .await?;
        Ok(profile)
    }
}
