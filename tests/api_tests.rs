//! HTTP surface tests

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use smartrecipe::routes::{RecommendationsResponse, UsersResponse, VocabularyResponse};
use smartrecipe_feedback::{CsvFeedbackLog, FeedbackSource};
use temp_dir::TempDir;

#[tokio::test]
async fn test_health() {
    let dir = TempDir::new().unwrap();

    let response = common::get(common::test_app(&dir), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = common::read_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_users_and_vocabulary() {
    let dir = TempDir::new().unwrap();

    let users: UsersResponse =
        common::read_json(common::get(common::test_app(&dir), "/users").await).await;
    let vocabulary: VocabularyResponse =
        common::read_json(common::get(common::test_app(&dir), "/vocabulary").await).await;

    assert_eq!(users.users, vec![1, 2, 3]);
    assert!(vocabulary.ingredients.contains(&"garlic".to_string()));
    assert!(vocabulary.ingredients.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_collaborative_recommendation() {
    let dir = TempDir::new().unwrap();

    let response = common::get(
        common::test_app(&dir),
        "/recommendations/collaborative/1?n=1",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: RecommendationsResponse = common::read_json(response).await;
    assert_eq!(body.recipes.len(), 1);
    assert_eq!(body.recipes[0].title, "Garlic Noodles");
}

#[tokio::test]
async fn test_unknown_user_is_empty_ok() {
    let dir = TempDir::new().unwrap();

    for uri in [
        "/recommendations/collaborative/999",
        "/recommendations/hybrid/999",
    ] {
        let response = common::get(common::test_app(&dir), uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: RecommendationsResponse = common::read_json(response).await;
        assert!(body.recipes.is_empty());
    }
}

#[tokio::test]
async fn test_content_recommendation() {
    let dir = TempDir::new().unwrap();

    let response = common::post_json(
        common::test_app(&dir),
        "/recommendations/content",
        json!({"ingredients": ["Tofu", " soy sauce "], "n": 2}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: RecommendationsResponse = common::read_json(response).await;
    assert_eq!(body.recipes.len(), 2);
    assert_eq!(body.recipes[0].title, "Mapo Tofu");
}

#[tokio::test]
async fn test_content_uses_default_count() {
    let dir = TempDir::new().unwrap();

    let response = common::post_json(
        common::test_app(&dir),
        "/recommendations/content",
        json!({"ingredients": ["garlic"]}),
    )
    .await;

    let body: RecommendationsResponse = common::read_json(response).await;
    assert_eq!(body.recipes.len(), 4);
}

#[tokio::test]
async fn test_hybrid_recommendation() {
    let dir = TempDir::new().unwrap();

    let response = common::get(common::test_app(&dir), "/recommendations/hybrid/1?n=2").await;

    let body: RecommendationsResponse = common::read_json(response).await;
    assert_eq!(body.recipes.len(), 2);
    assert_eq!(body.recipes[0].title, "Garlic Noodles");
}

#[tokio::test]
async fn test_feedback_is_appended() {
    let dir = TempDir::new().unwrap();

    for rating in [4, 2] {
        let response = common::post_json(
            common::test_app(&dir),
            "/feedback",
            json!({
                "user_id": 1,
                "recipe_title": "Garlic Noodles",
                "rating": rating,
                "source": "Hybrid"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let records = CsvFeedbackLog::new(dir.child("feedback.csv"))
        .records()
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].rating, 4);
    assert_eq!(records[1].rating, 2);
    assert_eq!(records[1].source, FeedbackSource::Hybrid);
}

#[tokio::test]
async fn test_feedback_invalid_rating_rejected() {
    let dir = TempDir::new().unwrap();

    let response = common::post_json(
        common::test_app(&dir),
        "/feedback",
        json!({
            "user_id": 1,
            "recipe_title": "Garlic Noodles",
            "rating": 9,
            "source": "Content-Based"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!dir.child("feedback.csv").exists());
}
