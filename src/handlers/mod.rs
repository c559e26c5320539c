pub mod analyze;
pub mod recent;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "seo-analyzer-server",
        "version": env!("CARGO_PKG_VERSION"),
        "cachedAnalyses": state.store.len().await,
    }))
}
