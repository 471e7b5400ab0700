//! Recommendation endpoint: top ranked matches plus explanatory text

use axum::{extract::State, Json};
use lapify_common::{filter, Laptop, Preferences};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::services::recommender::TOP_N;
use crate::AppState;

/// Returned instead of calling the text service when nothing matches
pub const NO_MATCH_REASONING: &str = "No laptops match these preferences.";

/// Request body for POST /api/recommendation
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RecommendationRequest {
    pub preferences: Preferences,
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    /// Up to three best-ranked matches
    pub laptops: Vec<Laptop>,
    pub reasoning: String,
}

/// POST /api/recommendation
pub async fn recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendationRequest>,
) -> Json<RecommendationResponse> {
    let catalog = state.catalog().await;
    let view = filter::filter_and_rank(&catalog.laptops, &req.preferences, &req.q);
    let top = &view[..view.len().min(TOP_N)];

    let reasoning = if top.is_empty() {
        debug!("No matches, skipping recommendation text");
        NO_MATCH_REASONING.to_string()
    } else {
        state.recommender.explain(top, &req.preferences).await
    };

    Json(RecommendationResponse {
        laptops: top.iter().map(|l| (*l).clone()).collect(),
        reasoning,
    })
}
