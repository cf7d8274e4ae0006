//! HTTP server entry point for Pohora.LK Intelligence.
//!
//! Loads settings from the environment, configures routes, and starts the
//! Axum server.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use pohora_config::Settings;
use pohora_server::{build_router, ServerState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let settings = Settings::from_env()?;
    let addr = settings.bind_addr();

    info!("Chat model: {}", settings.chat_model);
    info!("Crop model artifact: {}", settings.crop_model.display());
    info!("Fertilizer model artifact: {}", settings.fertilizer_model.display());

    let state = Arc::new(ServerState { settings });
    let app = build_router(state);

    info!("Starting Pohora.LK Intelligence on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
