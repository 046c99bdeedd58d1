//! Admin report handlers

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::admin::{BestClient, BestProfession, ReportQuery};
use crate::error::ApiResult;
use crate::state::AppState;

/// Best-earning profession between `start` and `end`
pub async fn best_profession(
    State(app_state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> ApiResult<Json<BestProfession>> {
    let Query(query) = query?;
    let window = query.window()?;

    let best = app_state.admin_service.best_profession(&window).await?;
    Ok(Json(best))
}

/// Top paying clients between `start` and `end`, `limit` rows (default 2)
pub async fn best_clients(
    State(app_state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<BestClient>>> {
    let Query(query) = query?;
    let window = query.window()?;

    let clients = app_state
        .admin_service
        .best_clients(&window, query.limit_or_default())
        .await?;
    Ok(Json(clients))
}
