use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use pulse_api::config::AppConfig;
use pulse_api::store::PgDocumentStore;
use pulse_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // A missing or malformed DATABASE_URL is fatal: the process must not
    // start serving without a store target.
    let config = AppConfig::from_env().context("configuration")?;
    info!("starting pulse-api in {:?} mode", config.environment);

    let store = PgDocumentStore::connect(&config)
        .await
        .context("document store initialization")?;

    let state = AppState { store: Arc::new(store) };

    // Allow tests or deployments to override port via env
    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("pulse-api listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.context("server")?;
    Ok(())
}
