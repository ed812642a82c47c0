//! `serve` command handler.

use std::sync::Arc;
use storysmith::{ApiState, OpenAiClient, StoryService, StorysmithConfig, create_router, serve};

/// Build the pipeline from settings and serve it until Ctrl-C.
///
/// The provider configuration is resolved before binding, so a missing
/// API key stops startup instead of failing every request.
pub async fn run_server(
    settings: &StorysmithConfig,
    bind: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let client_config = settings.client_config()?;
    tracing::info!(
        model = %client_config.model(),
        base_url = %client_config.base_url(),
        "Starting story API"
    );

    let service = StoryService::new(Arc::new(OpenAiClient::new(client_config)));
    let router = create_router(ApiState::new(service));

    let addr = bind.unwrap_or_else(|| settings.server.bind.clone());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    serve(listener, router, shutdown_signal()).await?;
    tracing::info!("Story API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
