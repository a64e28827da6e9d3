//! Command handlers.

use anyhow::Context;
use playtime_core::ResponseMode;
use playtime_server::{
    ApiState, LookupService, PlaytimeConfig, create_router, driver_from_config,
};
use tracing::{info, instrument};

fn build_service(config: &PlaytimeConfig, mode: Option<ResponseMode>) -> LookupService {
    let mode = mode.unwrap_or(config.pipeline.response_mode);
    LookupService::new(driver_from_config(&config.model), mode)
}

/// Serve the lookup API until Ctrl-C.
#[instrument(skip_all)]
pub async fn run_serve(bind: Option<String>, mode: Option<ResponseMode>) -> anyhow::Result<()> {
    let mut config = PlaytimeConfig::load()?;
    if let Some(bind) = bind {
        config.server.bind = bind;
    }

    let service = build_service(&config, mode);
    info!(mode = %service.mode(), origin = %config.server.allowed_origin, "Starting lookup server");
    let router = create_router(ApiState::new(service), &config.server)?;

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await?;
    Ok(())
}

/// Run one lookup and print `{"time": ...}`.
#[instrument(skip_all)]
pub async fn run_lookup(title: &str, mode: Option<ResponseMode>) -> anyhow::Result<()> {
    let config = PlaytimeConfig::load()?;
    let result = build_service(&config, mode).lookup(title).await?;
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
