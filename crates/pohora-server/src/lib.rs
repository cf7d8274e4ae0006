//! Pohora.LK Intelligence — the AI/ML service of the advisory platform.
//!
//! Exposes the chat agent and the crop/fertilizer recommendation routes as
//! one Axum application. The router is built here so integration tests can
//! drive it with `tower::ServiceExt::oneshot`.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use pohora_config::Settings;

/// Shared server state accessible from all handlers.
pub struct ServerState {
    pub settings: Settings,
}

/// Builds the full application router.
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/chat/ping", get(handlers::chat::ping))
        .route("/chat/get-agent-response/", post(handlers::chat::get_agent_response))
        .route("/recommendation/ping", get(handlers::recommendation::ping))
        .route("/recommendation/crop", post(handlers::recommendation::crop))
        .route("/recommendation/fertilizer", post(handlers::recommendation::fertilizer))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}
