//! Polimap Web Server
//!
//! Run with: cargo run -p polimap-web

use anyhow::Context;
use polimap_common::PolimapConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("polimap=debug,info")),
        )
        .init();

    info!("Starting Polimap Web Server...");

    let config = PolimapConfig::load(None).context("loading configuration")?;

    // Refuse to serve if the model cannot be assembled.
    let model = match polimap_artifacts::load_model(&config).await {
        Ok(model) => model,
        Err(e) => {
            error!("Cannot start: {e}");
            return Err(e).context("loading model artifacts");
        }
    };
    info!("Model loaded from {}", config.model.dir.display());

    let state = polimap_web::state::AppState::new(model);
    let app = polimap_web::router::build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
