use std::net::SocketAddr;

use anyhow::Context;
use mostrador_api::{app, AppState, DEFAULT_LOG_FILTER};
use mostrador_store::{app_config::Config, FileCatalogSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;

    // Single catalog load; the listener is not bound until it has finished.
    let source = FileCatalogSource::new(config.catalog.path.clone());
    let app_state = AppState::initialize(&config, &source).await?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Mostrador listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
