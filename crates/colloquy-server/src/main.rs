use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use colloquy_core::base_path::base_path;
use colloquy_personas::StaticRegistry;
use colloquy_render::render::PageRenderer;
use colloquy_server::config::ServerConfig;
use colloquy_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    if let Err(existing) = config.mode.install() {
        tracing::warn!(%existing, requested = %config.mode, "execution mode already fixed");
    }

    let personas = match &config.personas_path {
        Some(path) => StaticRegistry::load(path)?,
        None => {
            tracing::info!("no persona file configured, using built-in personas");
            StaticRegistry::builtin()?
        }
    };

    let state = AppState::new(Arc::new(personas), PageRenderer::new(config.mode)?);
    let app = colloquy_server::app(state, &config.static_dir);

    tracing::info!(mode = %config.mode, base_path = base_path(), "starting colloquy");

    if config.lambda {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
