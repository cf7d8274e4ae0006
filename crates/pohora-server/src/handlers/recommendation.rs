//! Crop and fertilizer recommendation HTTP handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use tracing::info;

use crate::dto::{BannerResponse, CropFeatures, CropRecommendation, FertilizerFeatures, FertilizerRecommendation};
use crate::error::AppError;
use crate::services;
use crate::ServerState;

/// Recommendation router health check.
pub async fn ping() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Pohora.LK Intelligence (Recommendation) router is up and running.",
    })
}

/// Recommends a crop for the given soil and climate measurements.
pub async fn crop(
    State(state): State<Arc<ServerState>>,
    Json(features): Json<CropFeatures>,
) -> Result<Json<CropRecommendation>, AppError> {
    let start = Instant::now();
    let recommendation = services::recommendation::recommend_crop(&state.settings, &features)?;
    info!("Crop recommendation took {} ms", start.elapsed().as_millis());
    Ok(Json(recommendation))
}

/// Recommends a fertilizer for the given field conditions and crop.
pub async fn fertilizer(
    State(state): State<Arc<ServerState>>,
    Json(features): Json<FertilizerFeatures>,
) -> Result<Json<FertilizerRecommendation>, AppError> {
    let start = Instant::now();
    let recommendation = services::recommendation::recommend_fertilizer(&state.settings, &features)?;
    info!("Fertilizer recommendation took {} ms", start.elapsed().as_millis());
    Ok(Json(recommendation))
}
