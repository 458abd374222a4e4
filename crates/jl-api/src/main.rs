//! Joule intent API — classification and knowledge-search REST server.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use jl_api::{ApiConfig, AppState, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "jl-api starting");

    let config = ApiConfig::from_env();
    let state = AppState::from_config(&config);
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
