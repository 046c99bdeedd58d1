//! Job API handlers

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::error::ApiResult;
use crate::middleware::CallerProfile;
use crate::models::Job;
use crate::state::AppState;

pub async fn list_unpaid_jobs(
    State(app_state): State<AppState>,
    CallerProfile(caller): CallerProfile,
) -> ApiResult<Json<Vec<Job>>> {
    let jobs = app_state.job_service.list_unpaid(caller.id).await?;
    Ok(Json(jobs))
}

/// Pay for a job out of the caller's balance
pub async fn pay_job(
    State(app_state): State<AppState>,
    CallerProfile(caller): CallerProfile,
    job_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Job>> {
    let Path(job_id) = job_id?;
    let job = app_state.job_service.pay(job_id, caller.id).await?;
    Ok(Json(job))
}
