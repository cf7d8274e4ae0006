//! Chat agent HTTP handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use tracing::info;

use crate::dto::{AgentResponse, BannerResponse, ConversationPayload};
use crate::error::AppError;
use crate::services;
use crate::ServerState;

/// Chat router health check.
pub async fn ping() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Pohora.LK Intelligence (Chat) is up and running.",
    })
}

/// Runs the agent against the conversation and returns its answer.
pub async fn get_agent_response(
    State(state): State<Arc<ServerState>>,
    Json(chat): Json<ConversationPayload>,
) -> Result<Json<AgentResponse>, AppError> {
    let start = Instant::now();

    let data = services::chat::run_agent(&state.settings, chat).await?;

    let elapsed = start.elapsed();
    info!("Agent response took {} ms", elapsed.as_millis());

    Ok(Json(AgentResponse {
        data,
        time: elapsed.as_secs_f64().round() as u64,
    }))
}
