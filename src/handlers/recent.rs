use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    models::{AnalysisResult, RecentQuery},
    state::AppState,
};

pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Requested limit, falling back to the default when absent or zero and
/// never exceeding `max`.
pub fn effective_limit(requested: Option<usize>, max: usize) -> usize {
    match requested {
        None | Some(0) => DEFAULT_RECENT_LIMIT,
        Some(n) => n,
    }
    .min(max)
}

/// GET /api/recent?limit=N
///
/// Previously stored analyses, newest first.
pub async fn list_recent(
    State(state): State<AppState>,
    Query(params): Query<RecentQuery>,
) -> Json<Vec<AnalysisResult>> {
    let limit = effective_limit(params.limit, state.recent_limit_max);
    Json(state.store.recent(limit).await)
}
