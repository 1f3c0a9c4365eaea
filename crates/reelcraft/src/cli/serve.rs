//! `reelcraft serve`.

use reelcraft::{AppState, Credentials, ReelcraftConfig, build_pipeline, serve};
use tokio::net::TcpListener;
use tracing::instrument;

/// Bind the configured (or overridden) address and serve until Ctrl-C.
#[instrument(skip(config))]
pub async fn handle_serve(
    config: &ReelcraftConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let pipeline = build_pipeline(config, Credentials::from_env())?;

    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let listener = TcpListener::bind((host.as_str(), port)).await?;

    serve(listener, AppState::new(pipeline)).await?;
    Ok(())
}
