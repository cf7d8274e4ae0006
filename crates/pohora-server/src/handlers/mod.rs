//! HTTP route handlers for the intelligence service.

pub mod chat;
pub mod recommendation;

use axum::Json;

use crate::dto::BannerResponse;

/// Root route (to test service health).
pub async fn root() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Pohora.LK Intelligence is up and running.",
    })
}

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}
