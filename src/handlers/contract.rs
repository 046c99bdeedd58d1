//! Contract API handlers

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::error::ApiResult;
use crate::middleware::CallerProfile;
use crate::models::{Contract, ContractDetails};
use crate::state::AppState;

/// Get a contract the caller takes part in
pub async fn get_contract(
    State(app_state): State<AppState>,
    CallerProfile(caller): CallerProfile,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<ContractDetails>> {
    let Path(id) = id?;
    let contract = app_state.contract_service.get_contract(id, caller.id).await?;
    Ok(Json(contract))
}

/// List the caller's non-terminated contracts
pub async fn list_contracts(
    State(app_state): State<AppState>,
    CallerProfile(caller): CallerProfile,
) -> ApiResult<Json<Vec<Contract>>> {
    let contracts = app_state.contract_service.list_contracts(caller.id).await?;
    Ok(Json(contracts))
}
