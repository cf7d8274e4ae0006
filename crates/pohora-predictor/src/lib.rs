//! Generic prediction service.
//!
//! A single `POST /predict` route over a model artifact loaded once at
//! startup. The artifact may be any supported model family; the route
//! returns its numeric prediction.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::response::{IntoResponse, Response as AxumResponse};
use axum::routing::{get, post};
use axum::{extract::State, Json, Router};
use ndarray::array;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use pohora_inference::ModelArtifact;

/// Shared state: the startup-loaded model artifact.
pub struct PredictorState {
    pub model: ModelArtifact,
}

/// Input features for a prediction.
#[derive(Debug, Deserialize)]
pub struct InputData {
    pub feature1: f64,
    pub feature2: f64,
    pub feature3: f64,
}

/// Response from the predict endpoint.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: f64,
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

/// Any handler failure maps to a 500 with the message as `detail`.
#[derive(Debug)]
pub struct AppError(pub String);

impl IntoResponse for AppError {
    fn into_response(self) -> AxumResponse {
        error!("{}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { detail: self.0 })).into_response()
    }
}

/// Predicts the numeric outcome for the posted features.
pub async fn predict(
    State(state): State<Arc<PredictorState>>,
    Json(data): Json<InputData>,
) -> Result<Json<PredictResponse>, AppError> {
    let input = array![data.feature1, data.feature2, data.feature3];
    let prediction = state
        .model
        .predict(input.view())
        .map_err(|e| AppError(e.to_string()))?;

    Ok(Json(PredictResponse { prediction }))
}

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}

/// Builds the application router.
pub fn build_router(state: Arc<PredictorState>) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    Router::new()
        .route("/predict", post(predict))
        .layer(trace_layer)
        .route("/health", get(health))
        .with_state(state)
}
