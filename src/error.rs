use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use smartrecipe_feedback::FeedbackError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Feedback error: {0}")]
    FeedbackError(#[from] FeedbackError),

    #[error("Internal server error")]
    InternalError(String),
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            AppError::FeedbackError(
                e @ (FeedbackError::InvalidRating(_) | FeedbackError::EmptyTitle),
            ) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            AppError::FeedbackError(e) => {
                tracing::error!("Feedback log error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to record feedback".to_string(),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}
