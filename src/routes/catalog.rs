use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use super::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VocabularyResponse {
    pub ingredients: Vec<String>,
}

/// GET /users - Users known to the collaborative model
pub async fn users(State(state): State<AppState>) -> Json<UsersResponse> {
    Json(UsersResponse {
        users: state.engine.user_ids().to_vec(),
    })
}

/// GET /vocabulary - Selectable ingredient tokens
pub async fn vocabulary(State(state): State<AppState>) -> Json<VocabularyResponse> {
    Json(VocabularyResponse {
        ingredients: state.engine.vocabulary().to_vec(),
    })
}
