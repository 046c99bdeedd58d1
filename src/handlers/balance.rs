//! Balance API handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use crate::balance::DepositRequest;
use crate::error::ApiResult;
use crate::middleware::CallerProfile;
use crate::models::Profile;
use crate::state::AppState;

/// Deposit into a client's balance
pub async fn deposit(
    State(app_state): State<AppState>,
    CallerProfile(caller): CallerProfile,
    user_id: Result<Path<i64>, PathRejection>,
    request: Result<Json<DepositRequest>, JsonRejection>,
) -> ApiResult<Json<Profile>> {
    let Path(user_id) = user_id?;
    let Json(request) = request?;

    let profile = app_state
        .balance_service
        .deposit(user_id, &request, &caller)
        .await?;

    Ok(Json(profile))
}
