pub mod analysis;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Application routes, without the observability and CORS layers `main` adds.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/analyze", post(handlers::analyze::analyze_url))
        .route("/api/recent", get(handlers::recent::list_recent))
        .with_state(state)
}
