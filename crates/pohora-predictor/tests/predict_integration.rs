//! HTTP integration tests for the generic predictor service.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use pohora_inference::{LinearModel, ModelArtifact};
use pohora_predictor::{build_router, PredictorState};

fn linear_app(coefficients: Vec<f64>, intercept: f64) -> axum::Router {
    let model = ModelArtifact::LinearRegression(LinearModel { coefficients, intercept });
    build_router(Arc::new(PredictorState { model }))
}

async fn post_predict(app: axum::Router, payload: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/predict")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn predict_returns_linear_combination() {
    let app = linear_app(vec![1.5, -2.0, 3.0], 0.5);
    let (status, body) = post_predict(
        app,
        json!({ "feature1": 2.0, "feature2": 1.0, "feature3": 4.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // 1.5*2 - 2*1 + 3*4 + 0.5
    assert_eq!(body["prediction"].as_f64().unwrap(), 13.5);
}

#[tokio::test]
async fn predict_with_mismatched_model_is_500() {
    // A model trained on two features cannot score a three-feature payload.
    let app = linear_app(vec![1.0, 1.0], 0.0);
    let (status, body) = post_predict(
        app,
        json!({ "feature1": 1.0, "feature2": 2.0, "feature3": 3.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].as_str().unwrap().contains("features"));
}

#[tokio::test]
async fn predict_with_missing_field_is_rejected() {
    let app = linear_app(vec![1.0, 1.0, 1.0], 0.0);
    let (status, _) = post_predict(app, json!({ "feature1": 1.0 })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn health_returns_ok() {
    let app = linear_app(vec![1.0, 1.0, 1.0], 0.0);
    let req = Request::builder().method("GET").uri("/health").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
