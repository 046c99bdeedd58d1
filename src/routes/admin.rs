//! Admin report route definitions

use axum::{routing::get, Router};

use crate::handlers::*;
use crate::state::AppState;

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/best-profession", get(best_profession))
        .route("/admin/best-clients", get(best_clients))
}
