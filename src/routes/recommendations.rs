use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use smartrecipe_catalog::RecipeSummary;

use super::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CountQuery {
    pub n: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContentRequest {
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub n: Option<usize>,
}

/// An empty `recipes` list means there is nothing to recommend.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recipes: Vec<RecipeSummary>,
}

impl From<Vec<RecipeSummary>> for RecommendationsResponse {
    fn from(recipes: Vec<RecipeSummary>) -> Self {
        Self { recipes }
    }
}

/// GET /recommendations/collaborative/{user_id}?n=
#[tracing::instrument(skip(state))]
pub async fn collaborative(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(query): Query<CountQuery>,
) -> Json<RecommendationsResponse> {
    let n = query.n.unwrap_or(state.default_count);
    Json(state.engine.recommend_cf(user_id, n).into())
}

/// GET /recommendations/hybrid/{user_id}?n=
#[tracing::instrument(skip(state))]
pub async fn hybrid(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(query): Query<CountQuery>,
) -> Json<RecommendationsResponse> {
    let n = query.n.unwrap_or(state.default_count);
    Json(state.engine.recommend_hybrid(user_id, n).into())
}

/// POST /recommendations/content
#[tracing::instrument(skip_all)]
pub async fn content(
    State(state): State<AppState>,
    Json(request): Json<ContentRequest>,
) -> Json<RecommendationsResponse> {
    let n = request.n.unwrap_or(state.default_count);
    Json(state.engine.recommend_content(request.ingredients.as_slice(), n).into())
}
