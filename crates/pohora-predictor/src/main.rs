//! HTTP server entry point for the generic predictor service.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use pohora_inference::ModelArtifact;
use pohora_predictor::{build_router, PredictorState};

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

    let model_path =
        std::env::var("PREDICTOR_MODEL").unwrap_or_else(|_| "models/regressor.json".into());
    let model = ModelArtifact::from_file(&model_path)
        .with_context(|| format!("loading model artifact '{model_path}'"))?;
    info!("Loaded model artifact '{}' ({} features)", model_path, model.n_features());

    let state = Arc::new(PredictorState { model });
    let app = build_router(state);

    let port = std::env::var("PREDICTOR_PORT").unwrap_or_else(|_| "8080".into());
    let addr = format!("0.0.0.0:{port}");
    info!("Starting predictor on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
