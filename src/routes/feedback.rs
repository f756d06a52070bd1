use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use smartrecipe_feedback::FeedbackRecord;

use super::AppState;
use crate::error::AppError;

/// POST /feedback - Append a rating to the feedback log
#[tracing::instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    Json(record): Json<FeedbackRecord>,
) -> Result<impl IntoResponse, AppError> {
    record.validate()?;
    let (user_id, source) = (record.user_id, record.source);

    let sink = state.feedback.clone();
    tokio::task::spawn_blocking(move || sink.submit(&record)).await??;

    tracing::info!(user_id, %source, "Feedback recorded");
    Ok((StatusCode::CREATED, Json(json!({"status": "recorded"}))))
}
