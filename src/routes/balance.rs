//! Balance route definitions

use axum::{routing::post, Router};

use crate::handlers::*;
use crate::state::AppState;

pub fn balance_routes() -> Router<AppState> {
    Router::new().route("/balances/deposit/:user_id", post(deposit))
}
