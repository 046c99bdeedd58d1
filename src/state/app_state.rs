//! Application state shared across handlers

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::admin::AdminService;
use crate::balance::BalanceService;
use crate::contract::ContractService;
use crate::job::JobService;
use crate::profile::ProfileService;

use axum::extract::FromRef;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub profile_service: Arc<ProfileService>,
    pub contract_service: Arc<ContractService>,
    pub job_service: Arc<JobService>,
    pub balance_service: Arc<BalanceService>,
    pub admin_service: Arc<AdminService>,
}

impl AppState {
    pub fn new(
        db_pool: SqlitePool,
        profile_service: Arc<ProfileService>,
        contract_service: Arc<ContractService>,
        job_service: Arc<JobService>,
        balance_service: Arc<BalanceService>,
        admin_service: Arc<AdminService>,
    ) -> Self {
        Self {
            db_pool,
            profile_service,
            contract_service,
            job_service,
            balance_service,
            admin_service,
        }
    }

    /// Build every service on top of one pool
    pub fn from_pool(db_pool: SqlitePool) -> Self {
        Self::new(
            db_pool.clone(),
            Arc::new(ProfileService::new(db_pool.clone())),
            Arc::new(ContractService::new(db_pool.clone())),
            Arc::new(JobService::new(db_pool.clone())),
            Arc::new(BalanceService::new(db_pool.clone())),
            Arc::new(AdminService::new(db_pool)),
        )
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<ProfileService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.profile_service.clone()
    }
}

impl FromRef<AppState> for Arc<ContractService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.contract_service.clone()
    }
}

impl FromRef<AppState> for Arc<JobService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.job_service.clone()
    }
}

impl FromRef<AppState> for Arc<BalanceService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.balance_service.clone()
    }
}

impl FromRef<AppState> for Arc<AdminService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.admin_service.clone()
    }
}
