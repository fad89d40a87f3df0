//! HealthBox server entry point: build the engine, mount the API, serve.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use healthbox::api::api_router;
use healthbox::config;
use healthbox::dialogue::DefaultDialogueEngine;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let engine = Arc::new(DefaultDialogueEngine::new());
    let app = api_router(engine);

    let addr = config::bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind API server");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "API server listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "API server terminated");
        std::process::exit(1);
    }
}
