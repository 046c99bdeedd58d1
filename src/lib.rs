//! Contractor marketplace backend library
//!
//! Clients hire contractors under contracts; contractors bill jobs against
//! those contracts. This crate exposes the HTTP API for reading contracts,
//! paying jobs, depositing funds and reporting on earnings.

pub mod admin;
pub mod balance;
pub mod config;
pub mod contract;
pub mod db;
pub mod error;
pub mod handlers;
pub mod job;
pub mod middleware;
pub mod models;
pub mod profile;
pub mod routes;
pub mod state;

use axum::{routing::get, Router};

use state::AppState;

/// Assemble the API router with request tracing applied
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .merge(routes::contract_routes())
        .merge(routes::job_routes())
        .merge(routes::balance_routes())
        .merge(routes::admin_routes())
        .with_state(app_state)
        .layer(axum::middleware::from_fn(middleware::request_tracing))
}

async fn root() -> &'static str {
    "Marketplace API Server"
}
