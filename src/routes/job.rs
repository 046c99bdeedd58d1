//! Job route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::*;
use crate::state::AppState;

pub fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs/unpaid", get(list_unpaid_jobs))
        .route("/jobs/:job_id/pay", post(pay_job))
}
