use axum::{extract::State, Json};
use tracing::info;
use validator::Validate;

use crate::{
    analysis::{self, normalize_url},
    error::{AppError, AppResult},
    extract::extract_tags,
    models::{AnalysisResult, AnalyzeRequest},
    state::AppState,
};

fn validation_error(e: validator::ValidationErrors) -> AppError {
    AppError::Validation(
        e.field_errors()
            .values()
            .flat_map(|v| v.iter())
            .filter_map(|e| e.message.as_ref())
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// POST /api/analyze
///
/// Returns the cached report for the normalized URL when one is live;
/// otherwise fetches the page, analyzes it and caches the result.
pub async fn analyze_url(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> AppResult<Json<AnalysisResult>> {
    req.validate().map_err(validation_error)?;

    let url = req.url.trim();
    let normalized = normalize_url(url);

    if let Some(cached) = state.store.get(&normalized).await {
        info!(url = %normalized, "Serving cached analysis");
        return Ok(Json(cached));
    }

    info!(url = %normalized, "Analyzing page");
    let html = state.fetcher.fetch(&normalized).await?;
    let result = analysis::analyze(url, extract_tags(&html));

    info!(
        url = %result.url,
        score = result.score,
        recommendations = result.recommendations.len(),
        "Analysis complete"
    );
    state.store.save(result.clone()).await;

    Ok(Json(result))
}
