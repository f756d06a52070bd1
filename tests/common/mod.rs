#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use smartrecipe::{AppState, router};
use smartrecipe_catalog::{Catalog, Rating, Recipe};
use smartrecipe_feedback::CsvFeedbackLog;
use smartrecipe_recommend::RecommendationEngine;
use temp_dir::TempDir;
use tower::ServiceExt;

pub fn sample_catalog() -> Catalog {
    Catalog::new(
        vec![
            Rating::new(1, 10, 5.0),
            Rating::new(1, 20, 3.0),
            Rating::new(2, 10, 4.0),
            Rating::new(2, 30, 5.0),
            Rating::new(3, 20, 2.0),
        ],
        vec![
            Recipe::new(10, "Garlic Chicken", "American", "chicken, rice, garlic"),
            Recipe::new(20, "Mapo Tofu", "Chinese", "['tofu', 'rice', 'soy sauce']"),
            Recipe::new(30, "Garlic Noodles", "Vietnamese", "noodles, garlic, butter"),
            Recipe::new(40, "Caprese", "Italian", "tomato, mozzarella, basil"),
        ],
    )
}

/// Router over the sample catalog, logging feedback inside `dir`.
pub fn test_app(dir: &TempDir) -> Router {
    let engine = RecommendationEngine::new(sample_catalog()).expect("engine builds");
    let log = CsvFeedbackLog::new(dir.child("feedback.csv"));
    router(AppState::new(engine, log, 5))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
