use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use smartrecipe_feedback::FeedbackSink;
use smartrecipe_recommend::RecommendationEngine;
use tower_http::trace::TraceLayer;

mod catalog;
mod feedback;
mod health;
mod recommendations;

pub use catalog::{UsersResponse, VocabularyResponse};
pub use recommendations::{ContentRequest, CountQuery, RecommendationsResponse};

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendationEngine>,
    pub feedback: Arc<dyn FeedbackSink>,
    pub default_count: usize,
}

impl AppState {
    pub fn new(
        engine: RecommendationEngine,
        feedback: impl FeedbackSink + 'static,
        default_count: usize,
    ) -> Self {
        Self {
            engine: Arc::new(engine),
            feedback: Arc::new(feedback),
            default_count,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/users", get(catalog::users))
        .route("/vocabulary", get(catalog::vocabulary))
        .route(
            "/recommendations/collaborative/{user_id}",
            get(recommendations::collaborative),
        )
        .route(
            "/recommendations/hybrid/{user_id}",
            get(recommendations::hybrid),
        )
        .route("/recommendations/content", post(recommendations::content))
        .route("/feedback", post(feedback::submit))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
